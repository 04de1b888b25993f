use crate::error::{ApiError, ErrorResponse};
use crate::models::CountResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /get handler - Read the current counter value
///
/// A key that is absent (nothing incremented yet) or whose stored
/// value is not an integer reads as 0.
#[utoipa::path(
    get,
    path = routes::COUNT,
    responses(
        (status = 200, description = "Current counter value", body = CountResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "counter"
)]
pub async fn get_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CountResponse>), ApiError> {
    let count = state.store.get(&state.config.counter_key).await?;

    tracing::debug!("Counter read as {}", count);
    Ok((StatusCode::OK, Json(CountResponse { count })))
}
