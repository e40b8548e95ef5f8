//! Handler for the public leaderboard.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use venturevibe_core::leaderboard::{clamp_leaderboard_size, LeaderboardEntry};
use venturevibe_db::repositories::LeaderboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the leaderboard.
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// Number of entries, default 20, clamped to 1..=100.
    pub limit: Option<i64>,
}

/// GET /api/v1/leaderboard
pub async fn top(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardQuery>,
) -> AppResult<Json<DataResponse<Vec<LeaderboardEntry>>>> {
    let limit = clamp_leaderboard_size(params.limit);
    let entries = LeaderboardRepo::top(&state.pool, limit).await?;
    Ok(Json(DataResponse { data: entries }))
}
