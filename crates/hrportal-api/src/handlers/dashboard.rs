//! Dashboard aggregate handlers.

use axum::Json;
use axum::extract::State;

use hrportal_entity::dashboard::{EmployeesOverview, LeaveStatusCount};
use hrportal_entity::department::DepartmentHeadcount;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/dashboard/employees-overview
pub async fn employees_overview(
    State(state): State<AppState>,
) -> Result<Json<EmployeesOverview>, ApiError> {
    Ok(Json(state.dashboard_service.employees_overview().await?))
}

/// GET /api/dashboard/employee-distribution-by-department
pub async fn distribution_by_department(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentHeadcount>>, ApiError> {
    Ok(Json(
        state.dashboard_service.distribution_by_department().await?,
    ))
}

/// GET /api/dashboard/leave-status-breakdown
pub async fn leave_status_breakdown(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaveStatusCount>>, ApiError> {
    Ok(Json(state.dashboard_service.leave_status_breakdown().await?))
}
