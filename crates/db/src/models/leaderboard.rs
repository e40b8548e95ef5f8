//! Leaderboard projection row.

use sqlx::FromRow;
use venturevibe_core::leaderboard::RankedIdea;
use venturevibe_core::types::Timestamp;

/// One ranked analysis joined with its session and founder.
#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardRow {
    pub idea_title: String,
    pub founder_name: Option<String>,
    pub industry: String,
    pub startup_viability_index: i32,
    pub created_at: Timestamp,
}

impl From<LeaderboardRow> for RankedIdea {
    fn from(row: LeaderboardRow) -> Self {
        RankedIdea {
            idea_title: row.idea_title,
            founder_name: row.founder_name,
            industry: row.industry,
            startup_viability_index: row.startup_viability_index,
            created_at: row.created_at,
        }
    }
}
