//! API Routes
//!
//! Configures the Axum router with all forecast service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_forecast_handler, get_forecast_handler, health_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /forecast` - Validate an address and return its forecast
/// - `GET /forecast/:postal_code` - Forecast for a postal code
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/forecast", post(create_forecast_handler))
        .route("/forecast/:postal_code", get(get_forecast_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::cache::MemoryCache;
    use crate::fetcher::DEFAULT_FORECAST_TTL;
    use crate::weather::{ApiKey, WeatherClient};

    fn create_test_app() -> Router {
        // Never reached: the tests below do not get past validation.
        let client = WeatherClient::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1",
            ApiKey::Fixed("test-key".to_string()),
        );
        let state = AppState::new(Arc::new(client), MemoryCache::new(10), DEFAULT_FORECAST_TTL);
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_post_forecast_missing_fields() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/forecast")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"street":"123 Main St","city":"Mesa"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_get_forecast_invalid_code() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/forecast/abcde")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
