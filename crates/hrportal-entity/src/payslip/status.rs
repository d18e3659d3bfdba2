//! Payslip enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use hrportal_core::AppError;

/// How the staff member is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "employee_type")]
pub enum EmployeeType {
    /// Paid by the hour.
    Hourly,
    /// Fixed salary.
    #[default]
    Salaried,
    /// Commission based.
    Commission,
}

/// Processing state of a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "payslip_status")]
pub enum PayslipStatus {
    /// Freshly computed.
    #[default]
    Generated,
    /// Signed off.
    Approved,
    /// Waiting for sign-off.
    #[serde(rename = "Pending Approval")]
    #[sqlx(rename = "Pending Approval")]
    PendingApproval,
    /// Rejected by a reviewer.
    Rejected,
    /// Fetched by the employee.
    Downloaded,
}

impl EmployeeType {
    /// Return the type as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::Salaried => "Salaried",
            Self::Commission => "Commission",
        }
    }
}

impl FromStr for EmployeeType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Hourly, Self::Salaried, Self::Commission]
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Invalid employee type: '{s}'. Expected one of: Hourly, Salaried, Commission"
                ))
            })
    }
}

impl PayslipStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generated => "Generated",
            Self::Approved => "Approved",
            Self::PendingApproval => "Pending Approval",
            Self::Rejected => "Rejected",
            Self::Downloaded => "Downloaded",
        }
    }
}

impl FromStr for PayslipStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Generated,
            Self::Approved,
            Self::PendingApproval,
            Self::Rejected,
            Self::Downloaded,
        ]
        .into_iter()
        .find(|status| status.as_str() == s)
        .ok_or_else(|| AppError::validation(format!("Invalid payslip status: '{s}'")))
    }
}
