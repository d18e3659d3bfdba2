//! Dashboard aggregate views.

pub mod model;

pub use model::{EmployeesOverview, LeaveStatusCount};
