//! Request DTOs with validation.
//!
//! Every body is camelCase. Required text fields default to empty so that a
//! missing field and a blank one fail with the same `400` message.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hrportal_core::error::AppError;
use hrportal_entity::department::NewDepartment;
use hrportal_entity::leave::LeaveStatus;
use hrportal_entity::project::{NewProject, ProjectStatus};
use hrportal_entity::staff::StaffProfileUpdate;
use hrportal_service::auth::{RegisterAdminInput, RegisterInput};
use hrportal_service::employee::{EmployeeChanges, EmployeeInput};
use hrportal_service::leave::LeaveInput;
use hrportal_service::payslip::{PayslipChanges, PayslipInput};

/// Parses an optional wire enum, treating blank as absent.
fn parse_opt<T>(value: Option<String>) -> Result<Option<T>, AppError>
where
    T: FromStr<Err = AppError>,
{
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim().parse())
        .transpose()
}

/// Required-by-validation fields, unwrapped after `validate()` has passed.
fn present<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::validation(format!("{field} is required")))
}

// ── Auth ─────────────────────────────────────────────────────

/// Self-registration body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub position: Option<String>,
    pub role: Option<String>,
}

impl RegisterRequest {
    /// Converts into service input, parsing the role.
    pub fn into_input(self) -> Result<RegisterInput, AppError> {
        Ok(RegisterInput {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            position: self.position,
            role: parse_opt(self.role)?,
        })
    }
}

/// Login body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Administrative account creation body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterAdminRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub role: Option<String>,
}

impl RegisterAdminRequest {
    /// Converts into service input, parsing the role.
    pub fn into_input(self) -> Result<RegisterAdminInput, AppError> {
        Ok(RegisterAdminInput {
            username: self.username,
            email: self.email,
            password: self.password,
            role: parse_opt(self.role)?,
        })
    }
}

/// Password change body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

// ── Leaves ───────────────────────────────────────────────────

/// Leave request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateLeaveRequest {
    #[validate(length(min = 1, message = "Leave type is required"))]
    pub leave_type: String,
    #[validate(required(message = "Start date is required"))]
    pub start_date: Option<NaiveDate>,
    #[validate(required(message = "End date is required"))]
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
}

impl CreateLeaveRequest {
    /// Converts into service input.
    pub fn into_input(self) -> Result<LeaveInput, AppError> {
        Ok(LeaveInput {
            leave_type: self.leave_type,
            start_date: present(self.start_date, "Start date")?,
            end_date: present(self.end_date, "End date")?,
            reason: self.reason,
        })
    }
}

/// Leave decision body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

impl LeaveStatusRequest {
    /// Parses the requested status.
    pub fn status(&self) -> Result<LeaveStatus, AppError> {
        self.status.trim().parse()
    }
}

// ── Employees ────────────────────────────────────────────────

/// Employee creation body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEmployeeRequest {
    pub employee_id: Option<String>,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub role: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub department_id: Option<Uuid>,
}

impl CreateEmployeeRequest {
    /// Converts into service input, parsing role and status.
    pub fn into_input(self) -> Result<EmployeeInput, AppError> {
        Ok(EmployeeInput {
            employee_code: self.employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            role: parse_opt(self.role)?,
            date_of_birth: self.date_of_birth,
            hire_date: self.hire_date,
            position: self.position,
            status: parse_opt(self.status)?,
            department_id: self.department_id,
        })
    }
}

/// Employee edit body. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEmployeeRequest {
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub department_id: Option<Uuid>,
}

impl UpdateEmployeeRequest {
    /// Converts into service changes, parsing role and status.
    pub fn into_changes(self) -> Result<EmployeeChanges, AppError> {
        Ok(EmployeeChanges {
            employee_code: self.employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            role: parse_opt(self.role)?,
            date_of_birth: self.date_of_birth,
            hire_date: self.hire_date,
            position: self.position,
            status: parse_opt(self.status)?,
            department_id: self.department_id,
        })
    }
}

/// Self-service profile body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl From<UpdateProfileRequest> for StaffProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
        }
    }
}

// ── Departments ──────────────────────────────────────────────

/// Department create/update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct DepartmentRequest {
    #[validate(length(min = 1, message = "Department name is required"))]
    pub name: String,
    pub description: Option<String>,
}

impl From<DepartmentRequest> for NewDepartment {
    fn from(req: DepartmentRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

// ── Projects ─────────────────────────────────────────────────

/// Project create/update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRequest {
    #[validate(length(min = 1, message = "Project name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub employee_id: Option<Uuid>,
}

impl ProjectRequest {
    /// Converts into a store record, `Planning` when no status is given.
    pub fn into_project(self) -> Result<NewProject, AppError> {
        Ok(NewProject {
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            status: parse_opt::<ProjectStatus>(self.status)?.unwrap_or_default(),
            staff_member_id: self.employee_id,
        })
    }
}

// ── Payslips ─────────────────────────────────────────────────

/// Payslip generation body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratePayslipRequest {
    #[validate(required(message = "Employee ID is required"))]
    pub employee_id: Option<Uuid>,
    #[validate(required(message = "Pay period start date is required"))]
    pub pay_period_start_date: Option<NaiveDate>,
    #[validate(required(message = "Pay period end date is required"))]
    pub pay_period_end_date: Option<NaiveDate>,
    pub employee_type: Option<String>,
    #[validate(required(message = "Gross pay is required"))]
    pub gross_pay: Option<f64>,
    #[serde(alias = "deductions")]
    pub other_deductions: Option<f64>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

impl GeneratePayslipRequest {
    /// Converts into service input.
    pub fn into_input(self) -> Result<PayslipInput, AppError> {
        Ok(PayslipInput {
            staff_member_id: present(self.employee_id, "Employee ID")?,
            pay_period_start_date: present(self.pay_period_start_date, "Pay period start date")?,
            pay_period_end_date: present(self.pay_period_end_date, "Pay period end date")?,
            employee_type: parse_opt(self.employee_type)?,
            gross_pay: present(self.gross_pay, "Gross pay")?,
            other_deductions: self.other_deductions,
            notes: self.notes,
            status: parse_opt(self.status)?,
        })
    }
}

/// Payslip edit body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePayslipRequest {
    pub pay_period_start_date: Option<NaiveDate>,
    pub pay_period_end_date: Option<NaiveDate>,
    pub employee_type: Option<String>,
    pub gross_pay: Option<f64>,
    #[serde(alias = "deductions")]
    pub other_deductions: Option<f64>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

impl UpdatePayslipRequest {
    /// Converts into service changes.
    pub fn into_changes(self) -> Result<PayslipChanges, AppError> {
        Ok(PayslipChanges {
            pay_period_start_date: self.pay_period_start_date,
            pay_period_end_date: self.pay_period_end_date,
            employee_type: parse_opt(self.employee_type)?,
            gross_pay: self.gross_pay,
            other_deductions: self.other_deductions,
            notes: self.notes,
            status: parse_opt(self.status)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use hrportal_core::ErrorKind;
    use hrportal_entity::principal::Role;

    use super::*;

    #[test]
    fn test_missing_leave_fields_fail_validation() {
        let body: CreateLeaveRequest = serde_json::from_str(r#"{"leaveType":"Annual"}"#).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_unknown_role_is_a_validation_error() {
        let body = RegisterRequest {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.co".into(),
            password: "secret1".into(),
            role: Some("Superuser".into()),
            ..RegisterRequest::default()
        };
        let err = body.into_input().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_hr_role_parses_from_wire_name() {
        let body = RegisterAdminRequest {
            username: "hr".into(),
            email: "hr@b.co".into(),
            password: "secret1".into(),
            role: Some("HR".into()),
        };
        assert_eq!(body.into_input().unwrap().role, Some(Role::Hr));
    }

    #[test]
    fn test_project_status_defaults_to_planning() {
        let body: ProjectRequest = serde_json::from_str(r#"{"name":"Audit"}"#).unwrap();
        assert_eq!(body.into_project().unwrap().status, ProjectStatus::Planning);
    }

    #[test]
    fn test_payslip_bodies_accept_deductions_key() {
        let generate: GeneratePayslipRequest =
            serde_json::from_str(r#"{"grossPay":100000,"deductions":500}"#).unwrap();
        assert_eq!(generate.other_deductions, Some(500.0));

        let update: UpdatePayslipRequest =
            serde_json::from_str(r#"{"deductions":250.5}"#).unwrap();
        assert_eq!(update.other_deductions, Some(250.5));
    }
}
