//! Employee handlers: HR management and self-service.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use hrportal_entity::staff::{StaffMember, StaffWithDepartment};

use crate::dto::request::{CreateEmployeeRequest, UpdateEmployeeRequest, UpdateProfileRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidJson, parse_uuid};
use crate::state::AppState;

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffWithDepartment>>, ApiError> {
    Ok(Json(state.employee_service.list().await?))
}

/// GET /api/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StaffMember>, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.employee_service.get(id).await?))
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<StaffMember>), ApiError> {
    let staff = state
        .employee_service
        .create(&auth, req.into_input()?)
        .await?;
    Ok((StatusCode::CREATED, Json(staff)))
}

/// PUT /api/employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateEmployeeRequest>,
) -> Result<Json<StaffMember>, ApiError> {
    let id = parse_uuid(&id)?;
    let staff = state
        .employee_service
        .update(&auth, id, req.into_changes()?)
        .await?;
    Ok(Json(staff))
}

/// DELETE /api/employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_uuid(&id)?;
    state.employee_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}

/// GET /api/employees/my-profile
pub async fn my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<StaffMember>, ApiError> {
    Ok(Json(state.employee_service.my_profile(&auth).await?))
}

/// PUT /api/employees/my-profile
pub async fn update_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<UpdateProfileRequest>,
) -> Result<Json<StaffMember>, ApiError> {
    let staff = state
        .employee_service
        .update_my_profile(&auth, req.into())
        .await?;
    Ok(Json(staff))
}
