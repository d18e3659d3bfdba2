//! Request context carrying the authenticated principal.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use hrportal_core::error::AppError;
use hrportal_entity::principal::{Principal, Role};
use hrportal_entity::staff::StaffMember;

/// Context for the current authenticated request.
///
/// Built by the auth middleware once the gate has resolved the token, and
/// passed into service methods so every operation knows who is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The resolved principal, as loaded for this request.
    pub principal: Principal,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(principal: Principal) -> Self {
        Self {
            principal,
            request_time: Utc::now(),
        }
    }

    /// The principal's id within its own store.
    pub fn principal_id(&self) -> Uuid {
        self.principal.id()
    }

    /// The principal's role.
    pub fn role(&self) -> Role {
        self.principal.role()
    }

    /// The staff record behind this request, or `Forbidden` for accounts.
    pub fn staff_member(&self) -> Result<&StaffMember, AppError> {
        match &self.principal {
            Principal::StaffMember(staff) => Ok(staff),
            Principal::Account(_) => Err(AppError::forbidden(
                "This action is only available to employees",
            )),
        }
    }
}
