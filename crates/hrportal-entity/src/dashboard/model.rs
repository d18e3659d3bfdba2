//! Read-only aggregates served by the dashboard.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::leave::LeaveStatus;
use crate::project::Project;

/// Headline counts for the dashboard landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeesOverview {
    /// Staff with status `active`.
    pub active_employees: i64,
    /// Staff with status `inactive`.
    pub inactive_employees: i64,
    /// All leave requests.
    pub total_leaves: i64,
    /// Leave requests still `Pending`.
    pub pending_leaves: i64,
    /// All projects.
    pub total_projects: i64,
    /// Up to five `Planning` projects, earliest start first.
    pub upcoming_projects: Vec<Project>,
}

/// Number of leave requests in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LeaveStatusCount {
    /// Status.
    pub status: LeaveStatus,
    /// Requests in that status.
    pub count: i64,
}
