//! Leaderboard ranking rules.

use serde::Serialize;

use crate::types::Timestamp;

/// Default number of leaderboard entries.
pub const DEFAULT_LEADERBOARD_SIZE: i64 = 20;

/// Largest leaderboard a caller may request.
pub const MAX_LEADERBOARD_SIZE: i64 = 100;

/// Display name used when the founder has not set one.
pub const ANONYMOUS_FOUNDER: &str = "Anonymous";

/// Clamp a requested leaderboard size to `1..=MAX_LEADERBOARD_SIZE`.
pub fn clamp_leaderboard_size(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_LEADERBOARD_SIZE)
        .clamp(1, MAX_LEADERBOARD_SIZE)
}

/// One row of the leaderboard as read from storage, already ordered.
#[derive(Debug, Clone)]
pub struct RankedIdea {
    pub idea_title: String,
    pub founder_name: Option<String>,
    pub industry: String,
    pub startup_viability_index: i32,
    pub created_at: Timestamp,
}

/// A public leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub idea_title: String,
    pub founder_name: String,
    pub industry: String,
    pub startup_viability_index: i32,
    pub created_at: Timestamp,
}

/// Assign consecutive 1-based ranks to rows already sorted best-first.
///
/// Blank or missing founder names become [`ANONYMOUS_FOUNDER`].
pub fn assign_ranks(rows: Vec<RankedIdea>) -> Vec<LeaderboardEntry> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| LeaderboardEntry {
            rank: i + 1,
            idea_title: row.idea_title,
            founder_name: row
                .founder_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| ANONYMOUS_FOUNDER.to_string()),
            industry: row.industry,
            startup_viability_index: row.startup_viability_index,
            created_at: row.created_at,
        })
        .collect()
}
