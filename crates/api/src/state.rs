use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gamemaster_db::DbPool,
    /// Server configuration (session cookie settings are read by extractors and handlers).
    pub config: Arc<ServerConfig>,
}
