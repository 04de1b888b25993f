use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// POST /incr handler - Increment the counter
///
/// Delegates to the store's atomic increment, so concurrent requests
/// never lose updates. A missing key is created at 0 by the store
/// before the increment. Responds with 204 and no body.
#[utoipa::path(
    post,
    path = routes::INCR,
    responses(
        (status = 204, description = "Counter incremented"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "counter"
)]
pub async fn incr_handler(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let value = state.store.incr(&state.config.counter_key).await?;

    tracing::debug!("Counter incremented to {}", value);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::{CounterStore, MemoryStore, UnavailableStore};
    use axum::{Router, body::Body, http::Request, routing::post};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(store: Arc<dyn CounterStore>) -> (Router, AppState) {
        let config = Config {
            redis_url: "redis://127.0.0.1:6379".to_string(),
            counter_key: "counter".to_string(),
            service_port: 8080,
            service_host: "0.0.0.0".to_string(),
            static_dir: "static".to_string(),
        };

        let state = AppState {
            store,
            config: Arc::new(config),
        };

        let app = Router::new()
            .route(crate::routes::INCR, post(incr_handler))
            .with_state(state.clone());

        (app, state)
    }

    #[tokio::test]
    async fn test_incr_returns_204_with_empty_body() {
        let (app, _state) = test_app(Arc::new(MemoryStore::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/incr")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_incr_mutates_store() {
        let store = Arc::new(MemoryStore::new());
        let (app, state) = test_app(store);

        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/incr")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }

        assert_eq!(state.store.get("counter").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_incr_uses_configured_key() {
        let store = Arc::new(MemoryStore::new());
        let config = Config {
            redis_url: "redis://127.0.0.1:6379".to_string(),
            counter_key: "hits".to_string(),
            service_port: 8080,
            service_host: "0.0.0.0".to_string(),
            static_dir: "static".to_string(),
        };
        let state = AppState {
            store: store.clone(),
            config: Arc::new(config),
        };
        let app = Router::new()
            .route(crate::routes::INCR, post(incr_handler))
            .with_state(state);

        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/incr")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(store.get("hits").await.unwrap(), 1);
        assert_eq!(store.get("counter").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_incr_store_failure_returns_500() {
        let (app, _state) = test_app(Arc::new(UnavailableStore));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/incr")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("Store error"));
    }
}
