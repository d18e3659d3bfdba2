//! Route handlers organized by domain.

pub mod auth;
pub mod dashboard;
pub mod department;
pub mod employee;
pub mod health;
pub mod leave;
pub mod payslip;
pub mod project;
pub mod ws;

use crate::error::ApiError;
use hrportal_core::error::AppError;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}
