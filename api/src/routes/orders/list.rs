use actix_web::{web, HttpResponse};

use order_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::order::ListOrdersQuery;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/orders/all
///
/// Query parameters: `transfer_status`, `archive`, `page`, `limit`.
pub async fn list_orders(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<ListOrdersQuery>,
) -> HttpResponse {
    match state
        .order_service
        .find_all_orders(auth.user_id, query.into_inner().into())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(ApiResponse::success(200, "Orders successfully fetched", page)),
        Err(error) => handle_domain_error(&error),
    }
}
