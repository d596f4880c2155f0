use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is already reference-counted and the
/// config sits behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: worklog_db::DbPool,
    /// Server configuration (read by middleware and the auth gate).
    pub config: Arc<ServerConfig>,
}
