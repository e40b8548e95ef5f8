//! Handlers for the `/sessions` resource.
//!
//! Every route is scoped to the authenticated user; another user's session
//! is indistinguishable from a missing one.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use venturevibe_core::error::CoreError;
use venturevibe_core::idea::IdeaInput;
use venturevibe_core::types::DbId;
use venturevibe_db::models::venture_session::VentureSessionDetail;
use venturevibe_db::repositories::VentureSessionRepo;

use crate::engine::session_pipeline::run_session;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/sessions
///
/// Analyze an idea and record it. Returns 201 with the stored session,
/// its analysis, and `is_fallback`. A body that does not deserialize into
/// an idea is a 400 validation error, like a field that fails its length check.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    body: Result<Json<IdeaInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<VentureSessionDetail>>)> {
    let Json(input) = body.map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
    let detail = run_session(
        &state.pool,
        &state.advisor,
        &state.config.quota,
        user.user_id,
        input,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/sessions
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<VentureSessionDetail>>>> {
    let sessions = VentureSessionRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: sessions }))
}

/// GET /api/v1/sessions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<VentureSessionDetail>>> {
    let detail = VentureSessionRepo::find_for_user(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "VentureSession",
            id,
        }))?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/sessions/{id}
///
/// Soft-deletes the session and its analysis. Does not refund quota.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VentureSessionRepo::soft_delete_for_user(&state.pool, id, user.user_id).await?;
    if deleted {
        tracing::info!(user_id = user.user_id, session_id = id, "Venture session deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "VentureSession",
            id,
        }))
    }
}
