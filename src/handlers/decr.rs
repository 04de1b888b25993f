use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// POST /decr handler - Decrement the counter
///
/// Same contract as increment: atomic on the store side, 204 with no
/// body. There is no floor check, so the counter may go negative.
#[utoipa::path(
    post,
    path = routes::DECR,
    responses(
        (status = 204, description = "Counter decremented"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "counter"
)]
pub async fn decr_handler(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let value = state.store.decr(&state.config.counter_key).await?;

    tracing::debug!("Counter decremented to {}", value);
    Ok(StatusCode::NO_CONTENT)
}
