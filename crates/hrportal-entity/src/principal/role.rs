//! Role enumeration shared by both principal variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles checked by the authorization gate.
///
/// Role checks are exact set membership; there is no privilege ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "principal_role")]
pub enum Role {
    /// System administrator.
    Admin,
    /// Human resources staff.
    #[serde(rename = "HR")]
    #[sqlx(rename = "HR")]
    Hr,
    /// Line manager.
    Manager,
    /// Regular employee.
    #[default]
    Employee,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Hr, Role::Manager, Role::Employee];

    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Hr => "HR",
            Self::Manager => "Manager",
            Self::Employee => "Employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = hrportal_core::AppError;

    /// Case-sensitive, like the role check itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                hrportal_core::AppError::validation(format!(
                    "Invalid role: '{s}'. Expected one of: Admin, HR, Manager, Employee"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!("HR".parse::<Role>().unwrap(), Role::Hr);
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("admin".parse::<Role>().is_err());
        assert!("hr".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"HR\"");
        let role: Role = serde_json::from_str("\"Manager\"").unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn test_default_is_employee() {
        assert_eq!(Role::default(), Role::Employee);
    }
}
