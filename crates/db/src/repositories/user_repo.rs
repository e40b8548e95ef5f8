//! Repository for the `users` table, including the weekly quota counter.

use sqlx::{PgExecutor, PgPool};
use venturevibe_core::quota::QuotaPolicy;
use venturevibe_core::types::{DbId, Timestamp};

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, weekly_session_count, weekly_reset_at, \
                       deleted_at, created_at, updated_at";

/// Provides user lookups and the atomic quota operations.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with a fresh quota window, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Reset the weekly counter if its window has ended, then return the user.
    ///
    /// The reset is a single conditional `UPDATE`, so concurrent callers
    /// cannot both reset (the second sees the advanced `weekly_reset_at`).
    /// Returns `None` if the user does not exist.
    pub async fn check_and_reset(
        pool: &PgPool,
        id: DbId,
        now: Timestamp,
        policy: &QuotaPolicy,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                weekly_session_count = 0,
                weekly_reset_at = $3
             WHERE id = $1 AND deleted_at IS NULL AND weekly_reset_at < $2
             RETURNING {COLUMNS}"
        );
        let reset = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(now)
            .bind(policy.next_reset_at(now))
            .fetch_optional(pool)
            .await?;

        match reset {
            Some(user) => {
                tracing::debug!(user_id = id, reset_at = %user.weekly_reset_at, "Weekly quota reset");
                Ok(Some(user))
            }
            None => Self::find_by_id(pool, id).await,
        }
    }

    /// Add one to the weekly counter only while it is below `limit`.
    ///
    /// Returns `true` if the counter was incremented. Accepts any executor so
    /// it can run inside the session-recording transaction.
    pub async fn try_increment_session_count<'e, E>(
        executor: E,
        id: DbId,
        limit: i32,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            "UPDATE users SET weekly_session_count = weekly_session_count + 1
             WHERE id = $1 AND deleted_at IS NULL AND weekly_session_count < $2",
        )
        .bind(id)
        .bind(limit)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite the quota fields. Used by operators and tests to seed state.
    pub async fn set_quota_state(
        pool: &PgPool,
        id: DbId,
        weekly_session_count: i32,
        weekly_reset_at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET weekly_session_count = $2, weekly_reset_at = $3
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(weekly_session_count)
        .bind(weekly_reset_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
