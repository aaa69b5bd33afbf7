use actix_web::{web, HttpResponse};
use validator::Validate;

use order_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::order::CreateOrderRequest;
use crate::handlers::error::{handle_domain_error, validation_failed};
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/v1/orders
///
/// Fees and the consignment id are computed server-side.
///
/// ## Errors
/// - 400 Bad Request: Body is not valid JSON or has wrongly typed fields
/// - 422 Unprocessable Entity: Business rule violations, keyed by field
/// - 500 Internal Server Error: Store write failure
pub async fn create_order(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateOrderRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    match state.order_service.create_order(request.into(), auth.user_id).await {
        Ok(order) => HttpResponse::Created().json(ApiResponse::success(201, "Order Created Successfully", order)),
        Err(error) => handle_domain_error(&error),
    }
}
