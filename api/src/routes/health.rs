use actix_web::HttpResponse;
use order_shared::types::ApiResponse;
use serde_json::json;

/// Handler for GET /api/v1/healthz
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(200, "Service is healthy", json!({ "status": "ok" })))
}
