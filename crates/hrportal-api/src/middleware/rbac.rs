//! The `authorize` stage: role membership for route groups.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use hrportal_auth::AuthGate;
use hrportal_entity::principal::Role;
use hrportal_service::context::RequestContext;

use crate::error::ApiError;

/// Admins only.
pub const ADMIN: &[Role] = &[Role::Admin];
/// People who manage others: Admin, HR and Manager.
pub const MANAGEMENT: &[Role] = &[Role::Admin, Role::Hr, Role::Manager];
/// Plain employees acting on their own records.
pub const EMPLOYEE: &[Role] = &[Role::Employee];
/// Any authenticated role.
pub const ANY_ROLE: &[Role] = &Role::ALL;

/// Rejects the request unless the attached principal holds one of the
/// allowed roles. Must run inside `protect`.
///
/// Mounted with `from_fn_with_state(ROLES, require_roles)`.
pub async fn require_roles(
    State(allowed): State<&'static [Role]>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let principal = request
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| &ctx.principal);

    AuthGate::authorize(principal, allowed)?;

    Ok(next.run(request).await)
}
