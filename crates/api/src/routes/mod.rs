pub mod health;
pub mod leaderboard;
pub mod quota;
pub mod sessions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sessions                 create, list (auth required)
/// /sessions/{id}            get, soft delete (auth required, owner only)
///
/// /quota                    caller's weekly quota (auth required)
///
/// /leaderboard              top ideas by viability index (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sessions", sessions::router())
        .nest("/quota", quota::router())
        .nest("/leaderboard", leaderboard::router())
}
