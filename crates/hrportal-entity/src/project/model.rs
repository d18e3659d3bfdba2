//! Project entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ProjectStatus;
use crate::staff::StaffSummary;

/// A tracked project, optionally assigned to one staff member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Planned start.
    pub start_date: Option<NaiveDate>,
    /// Planned end.
    pub end_date: Option<NaiveDate>,
    /// Lifecycle state.
    pub status: ProjectStatus,
    /// Assigned staff member.
    #[serde(rename = "employeeId")]
    pub staff_member_id: Option<Uuid>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A project with its assignee, as listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectWithAssignee {
    /// The project.
    #[serde(flatten)]
    pub project: Project,
    /// Assigned staff member summary.
    pub employee: Option<StaffSummary>,
}

/// Project fields for create and full update.
#[derive(Debug, Clone)]
pub struct NewProject {
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Planned start.
    pub start_date: Option<NaiveDate>,
    /// Planned end.
    pub end_date: Option<NaiveDate>,
    /// Lifecycle state.
    pub status: ProjectStatus,
    /// Assigned staff member.
    pub staff_member_id: Option<Uuid>,
}
