use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::errors;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod admin;
pub mod calculations;

pub const ROOT_MESSAGE: &str = "Application Running Successfully";

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service is running", body = String)))]
pub async fn root() -> Json<&'static str> {
    Json(ROOT_MESSAGE)
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/calculate/", post(calculations::create))
        .route("/calculations/", get(calculations::list))
        .route("/calculations/:id", get(calculations::get).delete(calculations::delete))
        .route("/admin/", get(admin::admin))
        .fallback(errors::not_found)
        .with_state(state);
    with_middleware(routes, cors)
}

/// Wrap a router in the panic catcher, CORS and request tracing.
pub fn with_middleware(router: Router, cors: CorsLayer) -> Router {
    router
        .layer(CatchPanicLayer::custom(errors::handle_panic))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
