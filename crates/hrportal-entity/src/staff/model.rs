//! Staff member entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::EmploymentStatus;
use crate::department::DepartmentRef;
use crate::principal::{PasswordDigest, Role};

/// An employee record. Employees log in with their own credentials.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    /// Unique record identifier.
    pub id: Uuid,
    /// Optional human-facing employee number.
    #[serde(rename = "employeeId")]
    pub employee_code: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email, lowercase.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Role for authorization.
    pub role: Role,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Date of hire.
    pub hire_date: NaiveDate,
    /// Job title.
    pub position: Option<String>,
    /// Employment status.
    pub status: EmploymentStatus,
    /// Department reference.
    pub department_id: Option<Uuid>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl StaffMember {
    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A staff member with its department, as listed to HR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffWithDepartment {
    /// The staff member.
    #[serde(flatten)]
    pub staff: StaffMember,
    /// Department `{id, name}`, if assigned.
    pub department: Option<DepartmentRef>,
}

/// The `{id, firstName, lastName}` shape embedded in other resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StaffSummary {
    /// Staff member id.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl From<&StaffMember> for StaffSummary {
    fn from(staff: &StaffMember) -> Self {
        Self {
            id: staff.id,
            first_name: staff.first_name.clone(),
            last_name: staff.last_name.clone(),
        }
    }
}

/// Data required to create a staff member.
#[derive(Debug, Clone)]
pub struct NewStaffMember {
    /// Optional employee number.
    pub employee_code: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email (normalized by the store).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: PasswordDigest,
    /// Role, `Employee` unless stated.
    pub role: Role,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Hire date; the store uses today when absent.
    pub hire_date: Option<NaiveDate>,
    /// Job title.
    pub position: Option<String>,
    /// Initial status.
    pub status: EmploymentStatus,
    /// Department reference.
    pub department_id: Option<Uuid>,
}

/// Partial update applied by HR staff. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct StaffUpdate {
    /// New employee number.
    pub employee_code: Option<String>,
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New login email.
    pub email: Option<String>,
    /// New digest, present only when a new password was supplied.
    pub password_hash: Option<PasswordDigest>,
    /// New role.
    pub role: Option<Role>,
    /// New date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// New hire date.
    pub hire_date: Option<NaiveDate>,
    /// New job title.
    pub position: Option<String>,
    /// New status.
    pub status: Option<EmploymentStatus>,
    /// New department.
    pub department_id: Option<Uuid>,
}

/// Self-service profile edit. Only these fields are employee-editable.
#[derive(Debug, Clone, Default)]
pub struct StaffProfileUpdate {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New date of birth.
    pub date_of_birth: Option<NaiveDate>,
}

impl StaffProfileUpdate {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.date_of_birth.is_none()
    }
}
