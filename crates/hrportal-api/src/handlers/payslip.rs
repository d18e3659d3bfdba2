//! Payslip handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use hrportal_entity::payslip::Payslip;

use crate::dto::request::{GeneratePayslipRequest, UpdatePayslipRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidJson, parse_uuid};
use crate::state::AppState;

/// POST /api/payslips/generate
pub async fn generate_payslip(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<GeneratePayslipRequest>,
) -> Result<(StatusCode, Json<Payslip>), ApiError> {
    let payslip = state
        .payslip_service
        .generate(&auth, req.into_input()?)
        .await?;
    Ok((StatusCode::CREATED, Json(payslip)))
}

/// GET /api/payslips
pub async fn list_payslips(State(state): State<AppState>) -> Result<Json<Vec<Payslip>>, ApiError> {
    Ok(Json(state.payslip_service.list().await?))
}

/// GET /api/payslips/my-payslips
pub async fn my_payslips(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Payslip>>, ApiError> {
    Ok(Json(state.payslip_service.my_payslips(&auth).await?))
}

/// GET /api/payslips/{id}
pub async fn get_payslip(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Payslip>, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.payslip_service.get(&auth, id).await?))
}

/// PUT /api/payslips/{id}
pub async fn update_payslip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdatePayslipRequest>,
) -> Result<Json<Payslip>, ApiError> {
    let id = parse_uuid(&id)?;
    let payslip = state
        .payslip_service
        .update(id, req.into_changes()?)
        .await?;
    Ok(Json(payslip))
}

/// DELETE /api/payslips/{id}
pub async fn delete_payslip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_uuid(&id)?;
    state.payslip_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Payslip deleted successfully")))
}
