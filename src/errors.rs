use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use jsonwebtoken::errors::{ErrorKind, Error as JwtError};
use derive_more::Display;
use uuid::Uuid;

/// Which kind of entity a `NotFound` refers to, so the transport layer can
/// tag the response ("experience", "company", "job category").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Experience,
    Company,
    JobCategory,
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotFoundKind::Experience => "experience",
            NotFoundKind::Company => "company",
            NotFoundKind::JobCategory => "job category",
        };
        write!(f, "{s}")
    }
}

/// Input rejected before any persistence mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Names exactly the required attributes that were absent or blank.
    MissingAttributes(Vec<&'static str>),
    /// Start date strictly after end date. Equal dates are valid.
    InvalidDateRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingAttributes(fields) => {
                write!(f, "missing attributes: {}", fields.join(", "))
            }
            ValidationError::InvalidDateRange => {
                write!(f, "start date must not be after end date")
            }
        }
    }
}

/// The two external domains this service composes data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Company,
    JobCategory,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Collaborator::Company => "company directory",
            Collaborator::JobCategory => "job-category taxonomy",
        };
        write!(f, "{s}")
    }
}

/// Failure classification for a single collaborator lookup. The service
/// forwards the category to its own caller; it never re-interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LookupError {
    #[display("entity unknown to the upstream domain")]
    NotFound,

    #[display("token rejected by the upstream domain")]
    Unauthorized,

    #[display("upstream unavailable: {_0}")]
    Unavailable(String),
}

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    NotFound(NotFoundKind),
    Upstream {
        collaborator: Collaborator,
        id: Uuid,
        cause: LookupError,
    },
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "validation error: {e}"),
            AppError::NotFound(kind) => write!(f, "{kind} not found"),
            AppError::Upstream { collaborator, id, cause } => {
                write!(f, "{collaborator} lookup for {id} failed: {cause}")
            }
            AppError::Internal(msg) => write!(f, "internal server error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(ValidationError::MissingAttributes(fields)) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "missing_attributes": fields
                })
            }
            AppError::Validation(ValidationError::InvalidDateRange) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "message": self.to_string()
                })
            }
            AppError::NotFound(kind) => {
                serde_json::json!({"error": format!("{kind} not found")})
            }
            AppError::Upstream { collaborator, .. } => {
                serde_json::json!({
                    "error": "Upstream failure",
                    "collaborator": collaborator.to_string()
                })
            }
            AppError::Internal(msg) => {
                tracing::error!("Unclassified failure: {msg}");
                serde_json::json!({"error": "Internal server error"})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // A collaborator rejecting our forwarded token is not this
            // caller's authentication problem; surfaced as a gateway error.
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound(NotFoundKind::Experience),
            _ => AppError::Internal(format!("Database error: {err}")),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[derive(Debug, Display)]
pub enum AuthError {
    #[display("Missing credentials")]
    MissingCredentials,

    #[display("Invalid token")]
    InvalidToken,

    #[display("Token expired")]
    TokenExpired,

    #[display("Forbidden: {_0}")]
    Forbidden(String),
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({"error": self.to_string()}))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        }
    }
}
