use actix_web::{web, HttpResponse};
use validator::Validate;

use order_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::LoginRequest;
use crate::handlers::error::{handle_domain_error, validation_failed};

/// Handler for POST /api/v1/login
///
/// # Request Body
///
/// ```json
/// { "username": "karim", "password": "secret" }
/// ```
///
/// `email` may be sent instead of, or together with, `username`.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Successfully logged in",
///     "type": "success",
///     "code": "200",
///     "data": {
///         "access_token": "...",
///         "refresh_token": "...",
///         "token_type": "Bearer",
///         "expires_in": 1735689600
///     }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed body, missing password or identifier
/// - 401 Unauthorized: Unknown user or wrong password (same body for both)
/// - 500 Internal Server Error: Token signing or store failure
pub async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    match state.auth_service.login(request.into()).await {
        Ok(tokens) => HttpResponse::Ok().json(ApiResponse::success(200, "Successfully logged in", tokens)),
        Err(error) => handle_domain_error(&error),
    }
}
