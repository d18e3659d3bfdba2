//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::principal::{PasswordDigest, Role};

/// A back-office login that is not an employee record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Display username.
    pub username: String,
    /// Login email, lowercase.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Account role.
    pub role: Role,
    /// Profile picture URL.
    pub profile_picture: Option<String>,
    /// Whether the account may log in.
    pub is_active: bool,
    /// Last successful login.
    pub last_login: Option<DateTime<Utc>>,
    /// Optional department reference.
    pub department_id: Option<Uuid>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Display username.
    pub username: String,
    /// Login email (normalized by the store).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: PasswordDigest,
    /// Assigned role.
    pub role: Role,
}
