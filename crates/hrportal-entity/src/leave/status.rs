//! Leave request status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "leave_status")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    #[default]
    Pending,
    /// Approved; the requester is marked on leave.
    Approved,
    /// Rejected.
    Rejected,
}

impl LeaveStatus {
    /// Every status, in display order.
    pub const ALL: [LeaveStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// Whether this status is a reviewer decision.
    pub fn is_decision(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = hrportal_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                hrportal_core::AppError::validation(format!(
                    "Invalid leave status: '{s}'. Expected one of: Pending, Approved, Rejected"
                ))
            })
    }
}
