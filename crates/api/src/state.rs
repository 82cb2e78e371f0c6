use std::sync::Arc;

use aisow_db::ProjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project persistence; PostgreSQL in production, memory in tests.
    pub store: Arc<dyn ProjectStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
