use crate::config::Config;
use crate::store::CounterStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CounterStore>,
    pub config: Arc<Config>,
}
