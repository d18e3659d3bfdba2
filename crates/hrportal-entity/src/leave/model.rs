//! Leave request entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::LeaveStatus;
use crate::staff::StaffSummary;

/// A staff member's time-off request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// Requesting staff member.
    pub staff_member_id: Uuid,
    /// Free-form type, e.g. `Annual`, `Sick`.
    pub leave_type: String,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave.
    pub end_date: NaiveDate,
    /// Optional justification.
    pub reason: Option<String>,
    /// Approval state.
    pub status: LeaveStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A leave request with its requester, as listed to reviewers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveWithRequester {
    /// The request.
    #[serde(flatten)]
    pub leave: LeaveRequest,
    /// Requester, absent if the staff record was removed.
    pub employee: Option<StaffSummary>,
}

/// Data required to file a leave request.
#[derive(Debug, Clone)]
pub struct NewLeaveRequest {
    /// Requesting staff member.
    pub staff_member_id: Uuid,
    /// Leave type.
    pub leave_type: String,
    /// First day.
    pub start_date: NaiveDate,
    /// Last day.
    pub end_date: NaiveDate,
    /// Justification.
    pub reason: Option<String>,
}
