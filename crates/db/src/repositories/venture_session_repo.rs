//! Repository for `venture_sessions` and their 1:1 `venture_analyses`.
//!
//! Sessions are never visible without their analysis: both rows are written
//! in one transaction, and every read joins them back together.

use std::collections::HashMap;

use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use venturevibe_core::idea::IdeaInput;
use venturevibe_core::types::DbId;

use crate::models::venture_session::{
    CreateVentureAnalysis, RecordOutcome, VentureAnalysis, VentureSession, VentureSessionDetail,
};
use crate::repositories::UserRepo;

/// Column list for `venture_sessions`.
const SESSION_COLUMNS: &str =
    "id, user_id, idea_title, idea_description, industry, target_market, created_at";

/// Column list for `venture_analyses`.
const ANALYSIS_COLUMNS: &str = "id, session_id, startup_viability_index, \
     market_opportunity_score, execution_feasibility_score, differentiation_score, \
     monetization_score, risk_score, risk_exposure_level, executive_summary, \
     risk_assessment, mvp_plan, positioning, elevator_pitch, linkedin_draft, \
     is_fallback, created_at";

/// Provides the Session Recorder write path and owner-scoped reads.
pub struct VentureSessionRepo;

impl VentureSessionRepo {
    /// Persist a session, its analysis, and the quota increment as one unit.
    ///
    /// The user row is locked first so concurrent requests from the same user
    /// serialize here; if the counter is already at `weekly_limit` nothing is
    /// written and [`RecordOutcome::QuotaExhausted`] is returned. Any storage
    /// error rolls back all three writes, leaving the quota untouched.
    ///
    /// Returns `RowNotFound` if the user does not exist.
    pub async fn record(
        pool: &PgPool,
        user_id: DbId,
        idea: &IdeaInput,
        analysis: &CreateVentureAnalysis,
        weekly_limit: i32,
    ) -> Result<RecordOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (count,): (i32,) = sqlx::query_as(
            "SELECT weekly_session_count FROM users
             WHERE id = $1 AND deleted_at IS NULL
             FOR UPDATE",
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        if count >= weekly_limit {
            return Ok(RecordOutcome::QuotaExhausted);
        }

        let session = Self::insert_session(&mut tx, user_id, idea).await?;
        let inserted = Self::insert_analysis(&mut tx, session.id, analysis).await?;

        if !UserRepo::try_increment_session_count(&mut *tx, user_id, weekly_limit).await? {
            return Ok(RecordOutcome::QuotaExhausted);
        }

        tx.commit().await?;
        Ok(RecordOutcome::Recorded(VentureSessionDetail::new(
            session, inserted,
        )))
    }

    /// List a user's sessions with their analyses, newest first.
    /// Excludes soft-deleted rows.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<VentureSessionDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {SESSION_COLUMNS} FROM venture_sessions
             WHERE user_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC, id DESC"
        );
        let sessions = sqlx::query_as::<_, VentureSession>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = sessions.iter().map(|s| s.id).collect();
        let query = format!(
            "SELECT {ANALYSIS_COLUMNS} FROM venture_analyses
             WHERE session_id = ANY($1) AND deleted_at IS NULL"
        );
        let mut analyses: HashMap<DbId, VentureAnalysis> =
            sqlx::query_as::<_, VentureAnalysis>(&query)
                .bind(&ids)
                .fetch_all(pool)
                .await?
                .into_iter()
                .map(|a| (a.session_id, a))
                .collect();

        Ok(sessions
            .into_iter()
            .filter_map(|session| match analyses.remove(&session.id) {
                Some(analysis) => Some(VentureSessionDetail::new(session, analysis)),
                None => {
                    tracing::warn!(session_id = session.id, "Session has no analysis, skipping");
                    None
                }
            })
            .collect())
    }

    /// Find one session owned by `user_id`. Excludes soft-deleted rows.
    ///
    /// Returns `None` both for missing sessions and for sessions owned by
    /// another user.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<VentureSessionDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {SESSION_COLUMNS} FROM venture_sessions
             WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL"
        );
        let Some(session) = sqlx::query_as::<_, VentureSession>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {ANALYSIS_COLUMNS} FROM venture_analyses
             WHERE session_id = $1 AND deleted_at IS NULL"
        );
        let analysis = sqlx::query_as::<_, VentureAnalysis>(&query)
            .bind(session.id)
            .fetch_optional(pool)
            .await?;

        Ok(analysis.map(|a| VentureSessionDetail::new(session, a)))
    }

    /// Soft-delete a session and its analysis together.
    ///
    /// Returns `true` if the session existed, belonged to `user_id`, and was
    /// not already deleted. Quota is not refunded.
    pub async fn soft_delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE venture_sessions SET deleted_at = NOW()
             WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query(
            "UPDATE venture_analyses SET deleted_at = NOW()
             WHERE session_id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    // ---- private helpers ----

    async fn insert_session(
        conn: &mut PgConnection,
        user_id: DbId,
        idea: &IdeaInput,
    ) -> Result<VentureSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO venture_sessions
                (user_id, idea_title, idea_description, industry, target_market)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {SESSION_COLUMNS}"
        );
        sqlx::query_as::<_, VentureSession>(&query)
            .bind(user_id)
            .bind(&idea.idea_title)
            .bind(&idea.idea_description)
            .bind(&idea.industry)
            .bind(&idea.target_market)
            .fetch_one(conn)
            .await
    }

    async fn insert_analysis(
        conn: &mut PgConnection,
        session_id: DbId,
        input: &CreateVentureAnalysis,
    ) -> Result<VentureAnalysis, sqlx::Error> {
        let query = format!(
            "INSERT INTO venture_analyses
                (session_id, startup_viability_index, market_opportunity_score,
                 execution_feasibility_score, differentiation_score, monetization_score,
                 risk_score, risk_exposure_level, executive_summary, risk_assessment,
                 mvp_plan, positioning, elevator_pitch, linkedin_draft, is_fallback)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {ANALYSIS_COLUMNS}"
        );
        sqlx::query_as::<_, VentureAnalysis>(&query)
            .bind(session_id)
            .bind(input.startup_viability_index)
            .bind(input.market_opportunity_score)
            .bind(input.execution_feasibility_score)
            .bind(input.differentiation_score)
            .bind(input.monetization_score)
            .bind(input.risk_score)
            .bind(&input.risk_exposure_level)
            .bind(&input.executive_summary)
            .bind(Json(&input.risk_assessment))
            .bind(Json(&input.mvp_plan))
            .bind(Json(&input.positioning))
            .bind(&input.elevator_pitch)
            .bind(&input.linkedin_draft)
            .bind(input.is_fallback)
            .fetch_one(conn)
            .await
    }
}
