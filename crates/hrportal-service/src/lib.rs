//! # hrportal-service
//!
//! Business logic layer for the HR portal. Each service orchestrates the
//! store traits, the password hasher, the token encoder and the
//! notification bus to implement one resource's use cases.
//!
//! Services follow constructor injection: every dependency is provided at
//! construction time as an `Arc`.

pub mod auth;
pub mod context;
pub mod dashboard;
pub mod department;
pub mod employee;
pub mod leave;
pub mod payslip;
pub mod project;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthService;
pub use context::RequestContext;
pub use dashboard::DashboardService;
pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use leave::LeaveService;
pub use payslip::PayslipService;
pub use project::ProjectService;
