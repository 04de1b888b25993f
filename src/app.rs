use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{decr_handler, get_handler, health_handler, incr_handler};
use crate::routes;
use crate::state::AppState;

/// Assemble the application router
///
/// All routed responses carry `Access-Control-Allow-Origin: *` so the
/// index page can be served from anywhere. Request handling
/// concurrency is left to the tokio runtime; the store client inside
/// the state is shared across all requests.
pub fn build_router(state: AppState) -> Router {
    let index = ServeFile::new(Path::new(&state.config.static_dir).join("index.html"));

    Router::new()
        .route(routes::INCR, post(incr_handler))
        .route(routes::DECR, post(decr_handler))
        .route(routes::COUNT, get(get_handler))
        .route(routes::HEALTH, get(health_handler))
        .route_service(routes::INDEX, index)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
