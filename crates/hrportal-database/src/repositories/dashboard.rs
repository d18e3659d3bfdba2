//! Dashboard aggregate queries.

use async_trait::async_trait;
use sqlx::PgPool;

use hrportal_core::result::AppResult;
use hrportal_entity::dashboard::{EmployeesOverview, LeaveStatusCount};
use hrportal_entity::department::DepartmentHeadcount;
use hrportal_entity::leave::LeaveStatus;
use hrportal_entity::project::{Project, ProjectStatus};
use hrportal_entity::staff::EmploymentStatus;

use super::db_error;
use crate::store::DashboardStore;

/// Number of upcoming projects on the overview.
const UPCOMING_PROJECTS: i64 = 5;

/// Read-only aggregate queries across tables.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Create a new dashboard repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count_staff(&self, status: EmploymentStatus) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM staff_members WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count staff members"))
    }
}

#[async_trait]
impl DashboardStore for DashboardRepository {
    async fn overview(&self) -> AppResult<EmployeesOverview> {
        let active_employees = self.count_staff(EmploymentStatus::Active).await?;
        let inactive_employees = self.count_staff(EmploymentStatus::Inactive).await?;

        let (total_leaves, pending_leaves): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE status = $1) FROM leave_requests",
        )
        .bind(LeaveStatus::Pending)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to count leave requests"))?;

        let total_projects: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count projects"))?;

        let upcoming_projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE status = $1 \
             ORDER BY start_date ASC NULLS LAST LIMIT $2",
        )
        .bind(ProjectStatus::Planning)
        .bind(UPCOMING_PROJECTS)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list upcoming projects"))?;

        Ok(EmployeesOverview {
            active_employees,
            inactive_employees,
            total_leaves,
            pending_leaves,
            total_projects,
            upcoming_projects,
        })
    }

    async fn headcount_by_department(&self) -> AppResult<Vec<DepartmentHeadcount>> {
        sqlx::query_as::<_, DepartmentHeadcount>(
            "SELECT d.id, d.name, COUNT(s.id) AS employee_count \
             FROM departments d \
             LEFT JOIN staff_members s ON s.department_id = d.id AND s.status = $1 \
             GROUP BY d.id, d.name \
             ORDER BY d.name ASC",
        )
        .bind(EmploymentStatus::Active)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to count staff by department"))
    }

    async fn leave_status_breakdown(&self) -> AppResult<Vec<LeaveStatusCount>> {
        sqlx::query_as::<_, LeaveStatusCount>(
            "SELECT status, COUNT(*) AS count FROM leave_requests \
             GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to group leave requests by status"))
    }
}
