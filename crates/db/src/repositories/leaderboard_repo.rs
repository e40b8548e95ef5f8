//! Read-only leaderboard projection over committed analyses.

use sqlx::PgPool;
use venturevibe_core::leaderboard::{assign_ranks, LeaderboardEntry};

use crate::models::leaderboard::LeaderboardRow;

/// Provides the public ranking of analyses.
pub struct LeaderboardRepo;

impl LeaderboardRepo {
    /// Top `limit` analyses by viability index, best first.
    ///
    /// Soft-deleted analyses and sessions are excluded. Ties keep insertion
    /// order (`venture_analyses.id` ascending).
    pub async fn top(pool: &PgPool, limit: i64) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            "SELECT s.idea_title, u.name AS founder_name, s.industry,
                    a.startup_viability_index, a.created_at
             FROM venture_analyses a
             JOIN venture_sessions s ON s.id = a.session_id
             JOIN users u ON u.id = s.user_id
             WHERE a.deleted_at IS NULL AND s.deleted_at IS NULL
             ORDER BY a.startup_viability_index DESC, a.id ASC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(assign_ranks(rows.into_iter().map(Into::into).collect()))
    }
}
