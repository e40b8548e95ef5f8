use axum::extract::State;
use axum::Json;
use chrono::Utc;
use venturevibe_core::error::CoreError;
use venturevibe_core::quota::QuotaStatus;
use venturevibe_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/quota
///
/// The caller's quota after applying any due reset.
pub async fn get_quota(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<QuotaStatus>>> {
    let policy = &state.config.quota;
    let row = UserRepo::check_and_reset(&state.pool, user.user_id, Utc::now(), policy)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("Unknown user".into()))?;
    Ok(Json(DataResponse {
        data: policy.status(row.quota_state()),
    }))
}
