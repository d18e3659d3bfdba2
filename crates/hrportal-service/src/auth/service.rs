//! Authentication use cases: register, login, profile, password change.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use hrportal_auth::{JwtEncoder, PasswordHasher, PasswordValidator};
use hrportal_core::config::auth::BootstrapAdmin;
use hrportal_core::error::AppError;
use hrportal_database::Stores;
use hrportal_database::store::{AccountStore, StaffStore};
use hrportal_entity::account::{Account, NewAccount};
use hrportal_entity::principal::{PasswordDigest, Principal, Role};
use hrportal_entity::staff::{EmploymentStatus, NewStaffMember};

use crate::context::RequestContext;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Self-registration of a staff member.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password; hashed before it reaches the store.
    pub password: String,
    /// Job title.
    pub position: Option<String>,
    /// Role, `Employee` when absent.
    pub role: Option<Role>,
}

/// Creation of an administrative account.
#[derive(Debug, Clone)]
pub struct RegisterAdminInput {
    /// Display username.
    pub username: String,
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Role, `Admin` when absent.
    pub role: Option<Role>,
}

/// A freshly issued token together with the principal it names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Signed bearer token.
    pub token: String,
    /// When the token stops verifying.
    pub expires_at: DateTime<Utc>,
    /// The authenticated principal, without its digest.
    pub user: Principal,
}

/// Handles credential checks and token issuance for both principal stores.
#[derive(Clone)]
pub struct AuthService {
    accounts: Arc<dyn AccountStore>,
    staff: Arc<dyn StaffStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        stores: &Stores,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            accounts: stores.accounts.clone(),
            staff: stores.staff.clone(),
            hasher,
            validator,
            encoder,
        }
    }

    /// Registers a staff member and logs them in.
    pub async fn register(&self, input: RegisterInput) -> Result<AuthSession, AppError> {
        let first_name = required(&input.first_name, "First name")?;
        let last_name = required(&input.last_name, "Last name")?;
        let email = required_email(&input.email)?;
        self.validator.validate(&input.password)?;

        if self.staff.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Employee with this email already exists"));
        }

        let staff = self
            .staff
            .create(&NewStaffMember {
                employee_code: None,
                first_name: first_name.to_owned(),
                last_name: last_name.to_owned(),
                email: email.to_owned(),
                password_hash: self.hasher.hash_password(&input.password)?,
                role: input.role.unwrap_or_default(),
                date_of_birth: None,
                hire_date: None,
                position: input.position.filter(|p| !p.trim().is_empty()),
                status: EmploymentStatus::Active,
                department_id: None,
            })
            .await?;

        info!(staff_member_id = %staff.id, role = %staff.role, "Staff member registered");

        self.session_for(Principal::StaffMember(staff))
    }

    /// Checks credentials and issues a token.
    ///
    /// The staff store is consulted before the account store. Unknown
    /// emails and wrong passwords fail identically, and both paths run one
    /// password verification.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }

        let principal = match self.staff.find_by_email(email).await? {
            Some(staff) => Some(Principal::StaffMember(staff)),
            None => self.accounts.find_by_email(email).await?.map(Principal::Account),
        };

        let Some(principal) = principal else {
            self.hasher.burn_verification(password);
            debug!("Login failed: no principal for email");
            return Err(AppError::unauthenticated(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, principal.password_hash())? {
            debug!(principal_id = %principal.id(), "Login failed: wrong password");
            return Err(AppError::unauthenticated(INVALID_CREDENTIALS));
        }

        if let Principal::Account(account) = &principal {
            if !account.is_active {
                debug!(account_id = %account.id, "Login failed: account disabled");
                return Err(AppError::unauthenticated(INVALID_CREDENTIALS));
            }
            self.accounts.record_login(account.id).await?;
        }

        info!(principal_id = %principal.id(), kind = %principal.kind(), "Login succeeded");

        self.session_for(principal)
    }

    /// Creates an administrative account. Does not log it in.
    pub async fn register_admin(&self, input: RegisterAdminInput) -> Result<Account, AppError> {
        let username = required(&input.username, "Username")?;
        let email = required_email(&input.email)?;
        self.validator.validate(&input.password)?;

        if self.accounts.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("User with this email already exists"));
        }

        let account = self
            .accounts
            .create(&NewAccount {
                username: username.to_owned(),
                email: email.to_owned(),
                password_hash: self.hasher.hash_password(&input.password)?,
                role: input.role.unwrap_or(Role::Admin),
            })
            .await?;

        info!(account_id = %account.id, role = %account.role, "Account registered");

        Ok(account)
    }

    /// Creates the configured bootstrap administrator if its email is free.
    ///
    /// Returns whether an account was created.
    pub async fn ensure_bootstrap_admin(&self, admin: &BootstrapAdmin) -> Result<bool, AppError> {
        if self.accounts.find_by_email(&admin.email).await?.is_some() {
            debug!("Bootstrap admin already present");
            return Ok(false);
        }

        self.register_admin(RegisterAdminInput {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password: admin.password.clone(),
            role: Some(Role::Admin),
        })
        .await?;

        Ok(true)
    }

    /// The caller's own profile.
    pub fn profile(&self, ctx: &RequestContext) -> Principal {
        ctx.principal.clone()
    }

    /// Changes the caller's password after checking the current one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(AppError::validation(
                "Current password and new password are required",
            ));
        }

        if !self
            .hasher
            .verify_password(current_password, ctx.principal.password_hash())?
        {
            return Err(AppError::unauthenticated("Incorrect current password"));
        }

        self.validator.validate(new_password)?;
        self.validator
            .validate_not_same(current_password, new_password)?;

        let mut principal = ctx.principal.clone();
        principal.set_password(new_password, self.hasher.as_ref())?;
        let digest = PasswordDigest::parse(principal.password_hash())?;

        let stored = match &principal {
            Principal::Account(account) => {
                self.accounts.update_password(account.id, &digest).await?
            }
            Principal::StaffMember(staff) => self.staff.update_password(staff.id, &digest).await?,
        };
        if !stored {
            return Err(AppError::not_found("User not found"));
        }

        info!(principal_id = %principal.id(), kind = %principal.kind(), "Password changed");

        Ok(())
    }

    fn session_for(&self, principal: Principal) -> Result<AuthSession, AppError> {
        let issued = self.encoder.issue(principal.id(), principal.kind())?;
        Ok(AuthSession {
            token: issued.token,
            expires_at: issued.expires_at,
            user: principal,
        })
    }
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    Ok(value)
}

fn required_email(value: &str) -> Result<&str, AppError> {
    let email = required(value, "Email")?;
    if !email.contains('@') {
        return Err(AppError::validation("Invalid email format"));
    }
    Ok(email)
}
