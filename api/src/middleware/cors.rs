//! CORS middleware configuration for cross-origin requests.
//!
//! Development and staging accept any origin. Production only accepts the
//! origins listed in `server.allowed_origins`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use order_shared::config::{Environment, ServerConfig};

/// Preflight cache lifetime in seconds
const MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance for the given environment
pub fn create_cors(environment: Environment, server: &ServerConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(MAX_AGE);

    if !environment.is_production() {
        return cors.allow_any_origin();
    }

    server
        .allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .fold(cors, |cors, origin| {
            tracing::info!(origin = %origin, "Allowing CORS origin");
            cors.allowed_origin(origin)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn preflight(environment: Environment, server: ServerConfig, origin: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(environment, &server))
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/ping")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let status = preflight(Environment::Development, ServerConfig::default(), "https://anything.test").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_production_allows_listed_origin() {
        let mut server = ServerConfig::default();
        server.allowed_origins = vec!["https://merchant.courier.test".to_string()];

        let status = preflight(Environment::Production, server, "https://merchant.courier.test").await;
        assert_eq!(status, StatusCode::OK);
    }
}
