mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use config::Config;
use state::AppState;
use store::RedisStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-redis-counter starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = RedisStore::from_config(&config).await?;

    let addr = format!("{}:{}", config.service_host, config.service_port);

    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    let app = app::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
