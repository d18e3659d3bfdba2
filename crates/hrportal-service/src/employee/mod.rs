//! Employee records: HR management and self-service.

pub mod service;

pub use service::{EmployeeChanges, EmployeeInput, EmployeeService};
