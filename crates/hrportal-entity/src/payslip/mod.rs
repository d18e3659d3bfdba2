//! Payslip entities and pay arithmetic.

pub mod amounts;
pub mod model;
pub mod status;

pub use amounts::PayAmounts;
pub use model::{NewPayslip, Payslip};
pub use status::{EmployeeType, PayslipStatus};
