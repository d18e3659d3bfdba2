//! Department entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An organizational unit.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Unique department identifier.
    pub id: Uuid,
    /// Unique name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the department was created.
    pub created_at: DateTime<Utc>,
    /// When the department was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The `{id, name}` shape embedded in staff listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DepartmentRef {
    /// Department id.
    pub id: Uuid,
    /// Department name.
    pub name: String,
}

/// Department fields for create and full update.
#[derive(Debug, Clone)]
pub struct NewDepartment {
    /// Unique name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Active headcount for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentHeadcount {
    /// Department id.
    pub id: Uuid,
    /// Department name.
    pub name: String,
    /// Active staff members in the department.
    pub employee_count: i64,
}
