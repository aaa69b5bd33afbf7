//! Extractor configuration
//!
//! Body and query parse failures are answered with the same 400 envelope as
//! DTO validation failures instead of actix's plain-text defaults.

use actix_web::{error::InternalError, web, HttpRequest};
use order_shared::types::FieldErrors;

use crate::handlers::error::bad_request;

/// Largest JSON body accepted, in bytes
const JSON_LIMIT: usize = 64 * 1024;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, req: &HttpRequest| {
            tracing::debug!(path = %req.path(), error = %err, "Rejected JSON body");
            let response = bad_request(single_error("body", err.to_string()));
            InternalError::from_response(err, response).into()
        })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req: &HttpRequest| {
        tracing::debug!(path = %req.path(), error = %err, "Rejected query string");
        let response = bad_request(single_error("query", err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req: &HttpRequest| {
        tracing::debug!(path = %req.path(), error = %err, "Rejected path parameters");
        let response = bad_request(single_error("path", err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

fn single_error(field: &str, message: String) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), vec![message]);
    errors
}
