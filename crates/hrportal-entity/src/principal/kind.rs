//! Principal variant discriminant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which credential store a principal lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrincipalKind {
    /// Administrative account (the `accounts` table).
    Account,
    /// Employee record (the `staff_members` table).
    StaffMember,
}

impl PrincipalKind {
    /// Return the kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::StaffMember => "StaffMember",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
