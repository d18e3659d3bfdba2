//! Employment status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Employment status of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "employment_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentStatus {
    /// Currently employed and working.
    #[default]
    Active,
    /// No longer active.
    Inactive,
    /// On approved leave.
    OnLeave,
}

impl EmploymentStatus {
    /// Whether the staff member appears in the default employee listing.
    pub fn is_listed(&self) -> bool {
        matches!(self, Self::Active | Self::OnLeave)
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::OnLeave => "on-leave",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmploymentStatus {
    type Err = hrportal_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "-").as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "on-leave" => Ok(Self::OnLeave),
            _ => Err(hrportal_core::AppError::validation(format!(
                "Invalid employment status: '{s}'. Expected one of: active, inactive, on-leave"
            ))),
        }
    }
}
