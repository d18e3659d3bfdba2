//! Project handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use hrportal_entity::project::{Project, ProjectWithAssignee};

use crate::dto::request::ProjectRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{ValidJson, parse_uuid};
use crate::state::AppState;

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectWithAssignee>>, ApiError> {
    Ok(Json(state.project_service.list().await?))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectWithAssignee>, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.project_service.get(id).await?))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = state.project_service.create(req.into_project()?).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<ProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    let id = parse_uuid(&id)?;
    let project = state
        .project_service
        .update(id, req.into_project()?)
        .await?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_uuid(&id)?;
    state.project_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
