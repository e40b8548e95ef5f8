//! The analysis session pipeline behind `POST /sessions`.
//!
//! Order matters: validation runs before any quota or provider work, the
//! quota is checked (and lazily reset) before the provider is called, and
//! the counter only moves inside the transaction that records the session.

use chrono::Utc;
use venturevibe_advisor::Advisor;
use venturevibe_core::error::CoreError;
use venturevibe_core::idea::IdeaInput;
use venturevibe_core::quota::QuotaPolicy;
use venturevibe_core::types::DbId;
use venturevibe_db::models::venture_session::{
    CreateVentureAnalysis, RecordOutcome, VentureSessionDetail,
};
use venturevibe_db::repositories::{UserRepo, VentureSessionRepo};
use venturevibe_db::DbPool;

use crate::error::AppResult;

/// Run one analysis for `user_id` and persist it.
///
/// # Errors
///
/// - [`CoreError::Validation`] if the idea fields are malformed.
/// - [`CoreError::Unauthorized`] if the token names an unknown user.
/// - [`CoreError::QuotaExceeded`] if the weekly limit is reached, either
///   up front or by a concurrent request before the write committed.
/// - Database errors if the write fails; nothing is persisted and no quota
///   is consumed.
pub async fn run_session(
    pool: &DbPool,
    advisor: &Advisor,
    policy: &QuotaPolicy,
    user_id: DbId,
    input: IdeaInput,
) -> AppResult<VentureSessionDetail> {
    let idea = input.normalized()?;

    let user = UserRepo::check_and_reset(pool, user_id, Utc::now(), policy)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("Unknown user".into()))?;

    if !policy.admits(user.weekly_session_count) {
        tracing::info!(
            user_id,
            weekly_session_count = user.weekly_session_count,
            "Weekly quota exhausted",
        );
        return Err(CoreError::QuotaExceeded {
            limit: policy.weekly_limit,
        }
        .into());
    }

    let finalized = advisor.analyze(&idea, user_id).await;
    let analysis = CreateVentureAnalysis::from_report(&finalized.report, finalized.is_fallback);

    match VentureSessionRepo::record(pool, user_id, &idea, &analysis, policy.weekly_limit).await? {
        RecordOutcome::Recorded(detail) => {
            tracing::info!(
                user_id,
                session_id = detail.session.id,
                startup_viability_index = detail.analysis.startup_viability_index,
                is_fallback = detail.is_fallback,
                "Venture session recorded",
            );
            Ok(detail)
        }
        RecordOutcome::QuotaExhausted => {
            tracing::info!(user_id, "Weekly quota used up by a concurrent request");
            Err(CoreError::QuotaExceeded {
                limit: policy.weekly_limit,
            }
            .into())
        }
    }
}
