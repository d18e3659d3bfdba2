//! Payslip generation and retrieval.

pub mod reference;
pub mod service;

pub use service::{PayslipChanges, PayslipInput, PayslipService};
