use actix_web::{web, HttpResponse};

use order_shared::types::ApiResponse;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/v1/logout
///
/// Revokes every access and refresh token of the caller. Requires
/// `Authorization: Bearer {access_token}`.
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid or already revoked access token
/// - 500 Internal Server Error: Token revocation failure
pub async fn logout(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.auth_service.logout(auth.user_id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(200, "Successfully logged out", ())),
        Err(error) => handle_domain_error(&error),
    }
}
