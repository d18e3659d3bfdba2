//! PostgreSQL repository implementations of the [`store`](crate::store) traits.

pub mod account;
pub mod dashboard;
pub mod department;
pub mod leave;
pub mod payslip;
pub mod project;
pub mod staff;

pub use account::AccountRepository;
pub use dashboard::DashboardRepository;
pub use department::DepartmentRepository;
pub use leave::LeaveRepository;
pub use payslip::PayslipRepository;
pub use project::ProjectRepository;
pub use staff::StaffRepository;

use hrportal_core::error::{AppError, ErrorKind};

/// Map a sqlx error to an [`AppError`] with the given context.
///
/// Unique violations on a known constraint become `Conflict` with a
/// client-facing message; everything else is a `Database` error.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                let message = match db_err.constraint() {
                    Some("accounts_email_key") | Some("staff_members_email_key") => {
                        "Email is already registered"
                    }
                    Some("staff_members_employee_code_key") => "Employee ID is already in use",
                    Some("departments_name_key") => "Department name already exists",
                    Some("payslips_reference_key") => "Payslip reference already exists",
                    _ => "Duplicate value",
                };
                return AppError::with_source(ErrorKind::Conflict, message, e);
            }
        }
        AppError::with_source(ErrorKind::Database, context, e)
    }
}
