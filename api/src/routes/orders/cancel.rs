use actix_web::{web, HttpResponse};

use order_shared::types::ApiResponse;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for PUT /api/v1/orders/{consignment_id}/cancel
///
/// Only the owner can cancel; anyone else gets the same 404 as for an
/// unknown id.
pub async fn cancel_order(
    state: web::Data<AppState>,
    auth: AuthContext,
    consignment_id: web::Path<String>,
) -> HttpResponse {
    match state
        .order_service
        .cancel_order(&consignment_id, auth.user_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(200, "Order Cancelled Successfully.", ())),
        Err(error) => handle_domain_error(&error),
    }
}
