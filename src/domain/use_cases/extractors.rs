use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};

use crate::{
    constants::{ROLE_ADMIN, ROLE_CANDIDATE},
    entities::token::Claims,
    errors::AuthError,
    middlewares::auth::RawBearer,
};

/// Extractor for authenticated claims, ensuring the caller is authenticated.
/// Returns 401 if no claims were attached by the auth middleware.
/// Usage: add `claims: AuthClaims` as a handler parameter.
#[derive(Debug)]
pub struct AuthClaims(pub Claims);

impl FromRequest for AuthClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthClaims(claims.clone()))),
            None => ready(Err(AuthError::MissingCredentials.into())),
        }
    }
}

/// Extractor requiring the admin role. 403 without the role, 401 when
/// unauthenticated.
#[derive(Debug)]
pub struct AdminClaims(pub Claims);

impl FromRequest for AdminClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(require_role(req, ROLE_ADMIN).map(AdminClaims))
    }
}

/// Extractor requiring the owner-candidate role, which gates the mutating
/// experience endpoints.
#[derive(Debug)]
pub struct CandidateClaims(pub Claims);

impl FromRequest for CandidateClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(require_role(req, ROLE_CANDIDATE).map(CandidateClaims))
    }
}

fn require_role(req: &HttpRequest, role: &str) -> Result<Claims, actix_web::Error> {
    match req.extensions().get::<Claims>() {
        Some(claims) if claims.has_role(role) => Ok(claims.clone()),
        Some(_) => Err(AuthError::Forbidden(format!("{role} role required")).into()),
        None => Err(AuthError::MissingCredentials.into()),
    }
}

/// Extractor for the caller's raw Authorization header value, forwarded
/// verbatim to collaborator lookups. Never logged.
#[derive(Debug)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl FromRequest for BearerToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<RawBearer>() {
            Some(raw) => ready(Ok(BearerToken(raw.0.clone()))),
            None => ready(Err(AuthError::MissingCredentials.into())),
        }
    }
}
