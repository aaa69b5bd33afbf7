//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError};

#[test]
fn test_validation_helper_builds_field_map() {
    let error = DomainError::validation("store_id", "Wrong Store selected.");
    match &error {
        DomainError::Validation { errors } => {
            assert_eq!(errors["store_id"], vec!["Wrong Store selected."]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(error.to_string().contains("store_id"));
}

#[test]
fn test_auth_and_token_errors_convert() {
    let error: DomainError = AuthError::InvalidCredentials.into();
    assert!(matches!(error, DomainError::Auth(AuthError::InvalidCredentials)));

    let error: DomainError = TokenError::TokenExpired.into();
    assert_eq!(error.to_string(), "Token expired");
}

#[test]
fn test_authentication_failure_classification() {
    assert!(DomainError::Unauthorized.is_authentication_failure());
    assert!(DomainError::Auth(AuthError::UserNotFound).is_authentication_failure());
    assert!(DomainError::Token(TokenError::UnexpectedAlgorithm).is_authentication_failure());

    assert!(!DomainError::Token(TokenError::TokenGenerationFailed).is_authentication_failure());
    assert!(!DomainError::persistence("db down").is_authentication_failure());
    assert!(!DomainError::not_found("order").is_authentication_failure());
}
