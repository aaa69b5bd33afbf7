//! Bearer token middleware for protected endpoints.
//!
//! The middleware pulls the token out of the `Authorization` header, hands
//! it to a [`SessionVerifier`] and, on success, injects an [`AuthContext`]
//! into the request extensions for handlers to extract.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use order_core::{
    domain::entities::token::Claims,
    errors::DomainError,
    repositories::TokenRepository,
    services::{CacheServiceTrait, SessionGate},
};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use crate::handlers::error::{handle_domain_error, unauthorized};

/// Authenticated caller, available to handlers behind [`JwtAuth`]
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: i64,
    /// The raw bearer token the request was authenticated with
    pub token: String,
    pub claims: Claims,
}

/// Object-safe view of the session gate so the middleware is not generic
/// over repository types
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Claims, DomainError>;
}

#[async_trait]
impl<T, C> SessionVerifier for SessionGate<T, C>
where
    T: TokenRepository + ?Sized,
    C: CacheServiceTrait + ?Sized,
{
    async fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        self.authenticate(token).await
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    verifier: Arc<dyn SessionVerifier>,
}

impl JwtAuth {
    pub fn new(verifier: Arc<dyn SessionVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn SessionVerifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    tracing::debug!(path = %req.path(), "Missing or malformed Authorization header");
                    return Ok(req.into_response(unauthorized()).map_into_right_body());
                }
            };

            let claims = match verifier.verify(&token).await {
                Ok(claims) => claims,
                Err(e) if e.is_authentication_failure() => {
                    tracing::debug!(path = %req.path(), error = %e, "Bearer token rejected");
                    return Ok(req.into_response(unauthorized()).map_into_right_body());
                }
                Err(e) => {
                    return Ok(req.into_response(handle_domain_error(&e)).map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthContext {
                user_id: claims.user_id,
                token,
                claims,
            });

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts the token from `Authorization: Bearer <token>`
///
/// The scheme is case-sensitive and the token must be non-empty.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Extractor for the authenticated caller
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| actix_web::error::ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[::std::prelude::v1::test]
    fn test_extract_bearer_token() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);

        let req = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);
    }

    #[::std::prelude::v1::test]
    fn test_scheme_is_case_sensitive() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);
    }

    #[::std::prelude::v1::test]
    fn test_empty_token_rejected() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);
    }
}
