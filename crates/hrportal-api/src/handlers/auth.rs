//! Auth handlers: register, login, logout, profile and password changes.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use hrportal_entity::principal::Principal;
use hrportal_service::auth::AuthSession;

use crate::dto::request::{
    ChangePasswordRequest, LoginRequest, RegisterAdminRequest, RegisterRequest,
};
use crate::dto::response::{MessageResponse, UserEnvelope};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthSession>), ApiError> {
    let session = state.auth_service.register(req.into_input()?).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<AuthSession>, ApiError> {
    let session = state.auth_service.login(&req.email, &req.password).await?;
    Ok(Json(session))
}

/// POST /api/auth/logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new("Logged out successfully"))
}

/// POST /api/auth/register-admin
pub async fn register_admin(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RegisterAdminRequest>,
) -> Result<(StatusCode, Json<UserEnvelope<Principal>>), ApiError> {
    let account = state.auth_service.register_admin(req.into_input()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            user: Principal::Account(account),
        }),
    ))
}

/// GET /api/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<UserEnvelope<Principal>> {
    Json(UserEnvelope {
        user: state.auth_service.profile(&auth),
    })
}

/// PUT /api/auth/change-password
/// PUT /api/employees/my-profile/change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidJson(req): ValidJson<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .auth_service
        .change_password(&auth, &req.current_password, &req.new_password)
        .await?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}
