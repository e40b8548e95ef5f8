use std::sync::Arc;

use venturevibe_advisor::Advisor;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: venturevibe_db::DbPool,
    /// Server configuration, including the quota policy.
    pub config: Arc<ServerConfig>,
    /// Analysis Orchestrator shared by all requests.
    pub advisor: Arc<Advisor>,
}
