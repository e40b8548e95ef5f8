//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venturevibe_core::quota::QuotaState;
use venturevibe_core::types::{DbId, Timestamp};

/// A user row from the `users` table.
///
/// Only the fields the analysis pipeline needs; credentials live with the
/// identity service.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub weekly_session_count: i32,
    pub weekly_reset_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// The quota fields of this user.
    pub fn quota_state(&self) -> QuotaState {
        QuotaState {
            weekly_session_count: self.weekly_session_count,
            weekly_reset_at: self.weekly_reset_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: Option<String>,
}
