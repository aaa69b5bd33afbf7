//! Mapping of domain failures onto HTTP error envelopes

use actix_web::{http::StatusCode, HttpResponse};
use order_core::errors::{AuthError, DomainError, TokenError};
use order_shared::types::{ErrorResponse, FieldErrors};

pub const VALIDATION_MESSAGE: &str = "Please fix the given errors";
pub const INVALID_REQUEST_MESSAGE: &str = "Please provide a valid request body";
pub const BAD_CREDENTIALS_MESSAGE: &str = "The user credentials were incorrect.";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
pub const NOT_FOUND_MESSAGE: &str = "The requested resource was not found";
pub const INTERNAL_MESSAGE: &str = "Something went wrong, please try again later";

/// Render an error envelope with the given status
pub fn error_response(status: StatusCode, body: ErrorResponse) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

pub fn unauthorized() -> HttpResponse {
    error_response(
        StatusCode::UNAUTHORIZED,
        ErrorResponse::new(StatusCode::UNAUTHORIZED.as_u16(), UNAUTHORIZED_MESSAGE),
    )
}

pub fn not_found(message: &str) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorResponse::new(StatusCode::NOT_FOUND.as_u16(), message),
    )
}

/// 400 envelope for a request that could not be read or failed DTO rules
pub fn bad_request(errors: FieldErrors) -> HttpResponse {
    error_response(
        StatusCode::BAD_REQUEST,
        ErrorResponse::new(StatusCode::BAD_REQUEST.as_u16(), INVALID_REQUEST_MESSAGE)
            .with_errors(errors),
    )
}

/// 400 envelope built from `validator` failures
pub fn validation_failed(errors: &validator::ValidationErrors) -> HttpResponse {
    bad_request(field_errors(errors))
}

/// Flatten `validator` output into the envelope's field map
pub fn field_errors(errors: &validator::ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, failures)| {
            let messages = failures
                .iter()
                .map(|failure| match &failure.message {
                    Some(message) => message.to_string(),
                    None => format!("The {} field is invalid.", field.replace('_', " ")),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Convert a domain error into its HTTP response
///
/// Server-side failures are logged with their detail and answered with a
/// generic message.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { errors } => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorResponse::new(StatusCode::UNPROCESSABLE_ENTITY.as_u16(), VALIDATION_MESSAGE)
                .with_errors(errors.clone()),
        ),
        DomainError::NotFound { resource } => {
            let mut message = format!("{} not found", resource);
            if let Some(first) = message.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            not_found(&message)
        }
        DomainError::Unauthorized => unauthorized(),
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Token(TokenError::TokenGenerationFailed) => {
            tracing::error!(error = %error, "Token signing failed");
            internal_error()
        }
        DomainError::Token(token_error) => {
            tracing::debug!(error = %token_error, "Rejected bearer token");
            unauthorized()
        }
        DomainError::Conflict { .. }
        | DomainError::Persistence { .. }
        | DomainError::Internal { .. } => {
            tracing::error!(error = %error, "Request failed");
            internal_error()
        }
    }
}

fn handle_auth_error(error: &AuthError) -> HttpResponse {
    match error {
        AuthError::UserNotFound | AuthError::InvalidCredentials => {
            tracing::info!(reason = %error, "Login rejected");
            error_response(
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(StatusCode::UNAUTHORIZED.as_u16(), BAD_CREDENTIALS_MESSAGE),
            )
        }
        AuthError::MissingCredentials => error_response(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(StatusCode::BAD_REQUEST.as_u16(), INVALID_REQUEST_MESSAGE)
                .with_field_error("username", "The username or email field is required."),
        ),
    }
}

fn internal_error() -> HttpResponse {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), INTERNAL_MESSAGE),
    )
}
