//! Leave request repository implementation.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use hrportal_core::result::AppResult;
use hrportal_entity::leave::{LeaveRequest, LeaveStatus, LeaveWithRequester, NewLeaveRequest};
use hrportal_entity::staff::{EmploymentStatus, StaffSummary};

use super::db_error;
use crate::store::LeaveStore;

/// Repository for the `leave_requests` table.
#[derive(Debug, Clone)]
pub struct LeaveRepository {
    pool: PgPool,
}

impl LeaveRepository {
    /// Create a new leave repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LeaveListingRow {
    #[sqlx(flatten)]
    leave: LeaveRequest,
    requester_first_name: Option<String>,
    requester_last_name: Option<String>,
}

impl From<LeaveListingRow> for LeaveWithRequester {
    fn from(row: LeaveListingRow) -> Self {
        let employee = match (row.requester_first_name, row.requester_last_name) {
            (Some(first_name), Some(last_name)) => Some(StaffSummary {
                id: row.leave.staff_member_id,
                first_name,
                last_name,
            }),
            _ => None,
        };
        Self {
            leave: row.leave,
            employee,
        }
    }
}

#[async_trait]
impl LeaveStore for LeaveRepository {
    async fn create(&self, data: &NewLeaveRequest) -> AppResult<LeaveRequest> {
        sqlx::query_as::<_, LeaveRequest>(
            "INSERT INTO leave_requests \
             (id, staff_member_id, leave_type, start_date, end_date, reason, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.staff_member_id)
        .bind(&data.leave_type)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.reason)
        .bind(LeaveStatus::Pending)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create leave request"))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<LeaveRequest>> {
        sqlx::query_as::<_, LeaveRequest>("SELECT * FROM leave_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find leave request"))
    }

    async fn list_all(&self) -> AppResult<Vec<LeaveWithRequester>> {
        let rows = sqlx::query_as::<_, LeaveListingRow>(
            "SELECT l.*, s.first_name AS requester_first_name, s.last_name AS requester_last_name \
             FROM leave_requests l \
             LEFT JOIN staff_members s ON s.id = l.staff_member_id \
             ORDER BY l.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list leave requests"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_for_staff(&self, staff_member_id: Uuid) -> AppResult<Vec<LeaveRequest>> {
        sqlx::query_as::<_, LeaveRequest>(
            "SELECT * FROM leave_requests WHERE staff_member_id = $1 \
             ORDER BY start_date DESC, created_at DESC",
        )
        .bind(staff_member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list leave requests for staff member"))
    }

    async fn apply_decision(
        &self,
        id: Uuid,
        status: LeaveStatus,
    ) -> AppResult<Option<LeaveRequest>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin leave decision transaction"))?;

        let leave = sqlx::query_as::<_, LeaveRequest>(
            "UPDATE leave_requests SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("Failed to update leave status"))?;

        let Some(leave) = leave else {
            // Dropping the transaction rolls it back.
            return Ok(None);
        };

        if status == LeaveStatus::Approved {
            sqlx::query(
                "UPDATE staff_members SET status = $2, updated_at = NOW() WHERE id = $1",
            )
            .bind(leave.staff_member_id)
            .bind(EmploymentStatus::OnLeave)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to mark staff member on leave"))?;
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit leave decision"))?;

        debug!(leave_id = %id, status = %status, "Leave decision committed");
        Ok(Some(leave))
    }
}
