//! Payslip entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{EmployeeType, PayslipStatus};

/// A pay statement for one staff member and pay period.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    /// Unique record identifier.
    pub id: Uuid,
    /// Human-facing reference, `PS-<yyyymmddHHMMSS>-<4 digits>`.
    #[serde(rename = "payslipId")]
    pub reference: String,
    /// Staff member being paid.
    #[serde(rename = "employeeId")]
    pub staff_member_id: Uuid,
    /// Period start.
    pub pay_period_start_date: NaiveDate,
    /// Period end.
    pub pay_period_end_date: NaiveDate,
    /// Pay basis.
    pub employee_type: EmployeeType,
    /// Gross pay.
    pub gross_pay: f64,
    /// PAYE tax.
    pub paye: f64,
    /// NSSF contribution.
    pub nssf: f64,
    /// Other deductions.
    pub other_deductions: f64,
    /// Total deductions.
    pub deductions: f64,
    /// Net pay.
    pub net_pay: f64,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Processing state.
    pub status: PayslipStatus,
    /// When the payslip was created.
    pub created_at: DateTime<Utc>,
    /// When the payslip was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields written on create and on update.
#[derive(Debug, Clone)]
pub struct NewPayslip {
    /// Reference string.
    pub reference: String,
    /// Staff member being paid.
    pub staff_member_id: Uuid,
    /// Period start.
    pub pay_period_start_date: NaiveDate,
    /// Period end.
    pub pay_period_end_date: NaiveDate,
    /// Pay basis.
    pub employee_type: EmployeeType,
    /// Computed amounts.
    pub amounts: super::PayAmounts,
    /// Notes.
    pub notes: Option<String>,
    /// Processing state.
    pub status: PayslipStatus,
}
