//! Project repository implementation.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use hrportal_core::result::AppResult;
use hrportal_entity::project::{NewProject, Project, ProjectWithAssignee};
use hrportal_entity::staff::StaffSummary;

use super::db_error;
use crate::store::ProjectStore;

const SELECT_WITH_ASSIGNEE: &str = "SELECT p.*, s.first_name AS assignee_first_name, \
     s.last_name AS assignee_last_name \
     FROM projects p \
     LEFT JOIN staff_members s ON s.id = p.staff_member_id";

/// Repository for the `projects` table.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProjectListingRow {
    #[sqlx(flatten)]
    project: Project,
    assignee_first_name: Option<String>,
    assignee_last_name: Option<String>,
}

impl From<ProjectListingRow> for ProjectWithAssignee {
    fn from(row: ProjectListingRow) -> Self {
        let employee = match (
            row.project.staff_member_id,
            row.assignee_first_name,
            row.assignee_last_name,
        ) {
            (Some(id), Some(first_name), Some(last_name)) => Some(StaffSummary {
                id,
                first_name,
                last_name,
            }),
            _ => None,
        };
        Self {
            project: row.project,
            employee,
        }
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn list(&self) -> AppResult<Vec<ProjectWithAssignee>> {
        let sql = format!("{SELECT_WITH_ASSIGNEE} ORDER BY p.created_at DESC");
        let rows = sqlx::query_as::<_, ProjectListingRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list projects"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProjectWithAssignee>> {
        let sql = format!("{SELECT_WITH_ASSIGNEE} WHERE p.id = $1");
        let row = sqlx::query_as::<_, ProjectListingRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find project"))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, data: &NewProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects \
             (id, name, description, start_date, end_date, status, staff_member_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.name.trim())
        .bind(&data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.status)
        .bind(data.staff_member_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create project"))
    }

    async fn update(&self, id: Uuid, data: &NewProject) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET name = $2, description = $3, start_date = $4, \
               end_date = $5, status = $6, staff_member_id = $7, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(data.name.trim())
        .bind(&data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.status)
        .bind(data.staff_member_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update project"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete project"))?;

        Ok(result.rows_affected() > 0)
    }
}
