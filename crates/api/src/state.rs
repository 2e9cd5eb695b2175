use std::sync::Arc;

use catalog_store::ProductStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator for product records.
    pub store: Arc<dyn ProductStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
