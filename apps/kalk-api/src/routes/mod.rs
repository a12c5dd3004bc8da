//! API routes

pub mod calculation;

use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware::map_response,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::calculation::{CalculateRequest, CalculateResponse, ErrorResponse},
    handlers,
    response::ApiError,
    AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::calculation::calculate_handler,
        health_handler
    ),
    components(
        schemas(CalculateRequest, CalculateResponse, ErrorResponse)
    ),
    tags(
        (name = "calculation", description = "Factorial endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Kalk API",
        version = "0.1.0",
        description = "Stateless service computing the factorials of two operands"
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(calculation::routes())
        .route("/health", axum::routing::get(health_handler));

    with_timeout(router, request_timeout)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bound every request by `timeout`, answering 504 with the JSON error body
pub fn with_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            timeout,
        ))
        .layer(map_response(timeout_as_json))
}

async fn timeout_as_json(response: Response) -> Response {
    if response.status() == StatusCode::GATEWAY_TIMEOUT {
        return ApiError::Timeout.into_response();
    }
    response
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use kalk_domain::OverflowPolicy;
    use tower::ServiceExt as _;

    fn app() -> Router {
        create_router(AppState::new(OverflowPolicy::Wrap), Duration::from_secs(10))
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_calculate_rejects_get() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/calculate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_request_times_out_with_json_error() {
        let slow = Router::new().route(
            "/slow",
            axum::routing::get(|| async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                "late"
            }),
        );
        let app = with_timeout(slow, Duration::from_millis(50));

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"{\"error\":\"Request timed out\"}\n");
    }

    #[test]
    fn test_openapi_documents_calculate() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/calculate"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
