//! Leave request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use hrportal_entity::leave::{LeaveRequest, LeaveWithRequester};

use crate::dto::request::{CreateLeaveRequest, LeaveStatusRequest};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidJson, parse_uuid};
use crate::state::AppState;

/// POST /api/leaves/request
pub async fn request_leave(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<CreateLeaveRequest>,
) -> Result<(StatusCode, Json<LeaveRequest>), ApiError> {
    let leave = state
        .leave_service
        .request(&auth, req.into_input()?)
        .await?;
    Ok((StatusCode::CREATED, Json(leave)))
}

/// GET /api/leaves/my-leaves
pub async fn my_leaves(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<LeaveRequest>>, ApiError> {
    Ok(Json(state.leave_service.my_leaves(&auth).await?))
}

/// GET /api/leaves
pub async fn list_leaves(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaveWithRequester>>, ApiError> {
    Ok(Json(state.leave_service.list_all().await?))
}

/// PUT /api/leaves/{id}/status
pub async fn decide_leave(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<LeaveStatusRequest>,
) -> Result<Json<LeaveRequest>, ApiError> {
    let id = parse_uuid(&id)?;
    let leave = state
        .leave_service
        .decide(&auth, id, req.status()?)
        .await?;
    Ok(Json(leave))
}
