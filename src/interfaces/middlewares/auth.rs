use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{errors::AuthError, AppState};

/// The caller's Authorization header value, kept verbatim so the detailed
/// lookup can forward it to the collaborators. Stored in request extensions,
/// never logged.
#[derive(Clone)]
pub struct RawBearer(pub String);

/// Bearer-token middleware: decodes the caller's JWT into `Claims` and
/// attaches them, along with the raw header value, to the request. Role
/// checks happen later in the claim extractors; the service layer stays
/// authorization-agnostic.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if is_public_route(req.path(), req.method().as_str()) {
                return service.call(req).await;
            }

            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| {
                    tracing::error!("AppState missing in middleware");
                    AuthError::InvalidToken
                })?
                .clone();

            let (header_value, token) = extract_token(&req).ok_or_else(|| {
                tracing::warn!("Missing or malformed Authorization header");
                AuthError::MissingCredentials
            })?;

            let claims = state.jwt_service.decode_claims(&token)?;

            req.extensions_mut().insert(claims);
            req.extensions_mut().insert(RawBearer(header_value));
            service.call(req).await
        })
    }
}

fn is_public_route(path: &str, method: &str) -> bool {
    if method == "OPTIONS" {
        return true;
    }

    matches!((path, method), ("/", "GET") | ("/health", "GET"))
}

/// Returns the full header value (forwarded to collaborators) and the bare
/// token (decoded locally).
fn extract_token(req: &ServiceRequest) -> Option<(String, String)> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some((header.to_string(), parts[1].to_string()))
            } else {
                None
            }
        })
}
