//! Weekly analysis quota policy.
//!
//! The database applies these rules atomically; the functions here define
//! them once so repositories, handlers, and tests agree on the arithmetic.

use chrono::Duration;
use serde::Serialize;

use crate::types::Timestamp;

/// Default number of analyses allowed per quota window.
pub const DEFAULT_WEEKLY_SESSION_LIMIT: i32 = 3;

/// Default quota window length in days.
pub const DEFAULT_QUOTA_WINDOW_DAYS: i64 = 7;

/// Limit and window length for the rolling weekly quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaPolicy {
    pub weekly_limit: i32,
    pub window: Duration,
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            weekly_limit: DEFAULT_WEEKLY_SESSION_LIMIT,
            window: Duration::days(DEFAULT_QUOTA_WINDOW_DAYS),
        }
    }
}

impl QuotaPolicy {
    /// A window is due for reset strictly after its reset instant.
    pub fn is_reset_due(&self, reset_at: Timestamp, now: Timestamp) -> bool {
        now > reset_at
    }

    /// Reset instant for a window opened at `now`.
    pub fn next_reset_at(&self, now: Timestamp) -> Timestamp {
        now + self.window
    }

    /// Whether one more analysis is admitted at the given usage count.
    pub fn admits(&self, weekly_session_count: i32) -> bool {
        weekly_session_count < self.weekly_limit
    }

    /// Apply a reset to a snapshot if it is due, returning the resulting state.
    pub fn reset_if_due(&self, state: QuotaState, now: Timestamp) -> QuotaState {
        if self.is_reset_due(state.weekly_reset_at, now) {
            QuotaState {
                weekly_session_count: 0,
                weekly_reset_at: self.next_reset_at(now),
            }
        } else {
            state
        }
    }

    /// Summarize a (post-reset) state for display.
    pub fn status(&self, state: QuotaState) -> QuotaStatus {
        QuotaStatus {
            weekly_session_count: state.weekly_session_count,
            weekly_session_limit: self.weekly_limit,
            sessions_remaining: (self.weekly_limit - state.weekly_session_count).max(0),
            weekly_reset_at: state.weekly_reset_at,
        }
    }
}

/// The quota fields of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaState {
    pub weekly_session_count: i32,
    pub weekly_reset_at: Timestamp,
}

/// Quota summary returned to the owning user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaStatus {
    pub weekly_session_count: i32,
    pub weekly_session_limit: i32,
    pub sessions_remaining: i32,
    pub weekly_reset_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(day: u32, hour: u32) -> Timestamp {
        chrono::Utc
            .with_ymd_and_hms(2025, 3, day, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn default_policy_is_three_per_week() {
        let policy = QuotaPolicy::default();
        assert_eq!(policy.weekly_limit, 3);
        assert_eq!(policy.window, Duration::days(7));
    }

    #[test]
    fn admits_below_limit_only() {
        let policy = QuotaPolicy::default();
        assert!(policy.admits(0));
        assert!(policy.admits(2));
        assert!(!policy.admits(3));
        assert!(!policy.admits(7));
    }

    #[test]
    fn resets_strictly_after_reset_instant() {
        let policy = QuotaPolicy::default();
        let reset_at = at(10, 12);
        assert!(!policy.is_reset_due(reset_at, reset_at));
        assert!(policy.is_reset_due(reset_at, reset_at + Duration::seconds(1)));
    }

    #[test]
    fn reset_zeroes_count_and_advances_from_now() {
        let policy = QuotaPolicy::default();
        let now = at(20, 9);
        let state = QuotaState {
            weekly_session_count: 3,
            weekly_reset_at: at(10, 12),
        };
        let reset = policy.reset_if_due(state, now);
        assert_eq!(reset.weekly_session_count, 0);
        assert_eq!(reset.weekly_reset_at, now + Duration::days(7));
    }

    #[test]
    fn no_reset_before_window_ends() {
        let policy = QuotaPolicy::default();
        let state = QuotaState {
            weekly_session_count: 2,
            weekly_reset_at: at(20, 12),
        };
        assert_eq!(policy.reset_if_due(state, at(15, 0)), state);
    }

    #[test]
    fn status_never_reports_negative_remaining() {
        let policy = QuotaPolicy::default();
        let status = policy.status(QuotaState {
            weekly_session_count: 5,
            weekly_reset_at: at(20, 12),
        });
        assert_eq!(status.sessions_remaining, 0);
        assert_eq!(status.weekly_session_limit, 3);
    }
}
