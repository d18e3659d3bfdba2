//! Department handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use hrportal_entity::department::Department;

use crate::dto::request::DepartmentRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{ValidJson, parse_uuid};
use crate::state::AppState;

/// GET /api/departments
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Department>>, ApiError> {
    Ok(Json(state.department_service.list().await?))
}

/// GET /api/departments/{id}
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Department>, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.department_service.get(id).await?))
}

/// POST /api/departments
pub async fn create_department(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<DepartmentRequest>,
) -> Result<(StatusCode, Json<Department>), ApiError> {
    let department = state.department_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// PUT /api/departments/{id}
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<DepartmentRequest>,
) -> Result<Json<Department>, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.department_service.update(id, req.into()).await?))
}

/// DELETE /api/departments/{id}
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_uuid(&id)?;
    state.department_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Department deleted successfully")))
}
