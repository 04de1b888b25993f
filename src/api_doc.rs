use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::CountResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-redis-counter API",
        version = "1.0.0",
        description = "A shared counter service backed by Redis"
    ),
    paths(
        handlers::health::health_handler,
        handlers::incr::incr_handler,
        handlers::decr::decr_handler,
        handlers::get::get_handler
    ),
    components(
        schemas(
            CountResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "counter", description = "Counter operations")
    )
)]
pub struct ApiDoc;
