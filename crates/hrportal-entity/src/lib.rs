//! # hrportal-entity
//!
//! Domain entity models for the HR portal. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! JSON field names are camelCase to match the public API.

pub mod account;
pub mod dashboard;
pub mod department;
pub mod leave;
pub mod payslip;
pub mod principal;
pub mod project;
pub mod staff;

pub use account::Account;
pub use principal::{PasswordDigest, Principal, PrincipalKind, Role, SecretHasher};
pub use staff::{EmploymentStatus, StaffMember};
