//! Leave request filing, listing and decisions.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use hrportal_core::error::AppError;
use hrportal_database::Stores;
use hrportal_database::store::{LeaveStore, StaffStore};
use hrportal_entity::leave::{LeaveRequest, LeaveStatus, LeaveWithRequester, NewLeaveRequest};
use hrportal_realtime::{Broadcaster, NotificationEvent};

use crate::context::RequestContext;

/// A leave request as filed by a staff member.
#[derive(Debug, Clone)]
pub struct LeaveInput {
    /// Free-form leave type such as `"Annual"`.
    pub leave_type: String,
    /// First day off.
    pub start_date: NaiveDate,
    /// Last day off.
    pub end_date: NaiveDate,
    /// Optional reason.
    pub reason: Option<String>,
}

/// Files leave requests and records reviewer decisions.
#[derive(Clone)]
pub struct LeaveService {
    leaves: Arc<dyn LeaveStore>,
    staff: Arc<dyn StaffStore>,
    broadcaster: Arc<dyn Broadcaster>,
}

impl LeaveService {
    /// Creates a new leave service.
    pub fn new(stores: &Stores, broadcaster: Arc<dyn Broadcaster>) -> Self {
        Self {
            leaves: stores.leaves.clone(),
            staff: stores.staff.clone(),
            broadcaster,
        }
    }

    /// Files a `Pending` request for the calling staff member and announces
    /// it to every open listener.
    ///
    /// The announcement happens once the record is stored and can never
    /// fail the request.
    pub async fn request(
        &self,
        ctx: &RequestContext,
        input: LeaveInput,
    ) -> Result<LeaveRequest, AppError> {
        let requester = ctx.staff_member()?;

        let leave_type = input.leave_type.trim();
        if leave_type.is_empty() {
            return Err(AppError::validation("Leave type is required"));
        }
        if input.end_date < input.start_date {
            return Err(AppError::validation("End date cannot be before start date"));
        }

        let leave = self
            .leaves
            .create(&NewLeaveRequest {
                staff_member_id: requester.id,
                leave_type: leave_type.to_owned(),
                start_date: input.start_date,
                end_date: input.end_date,
                reason: input.reason.filter(|r| !r.trim().is_empty()),
            })
            .await?;

        info!(
            leave_id = %leave.id,
            staff_member_id = %requester.id,
            "Leave request filed"
        );

        if !self.broadcaster.has_open_listeners() {
            info!(leave_id = %leave.id, "No open listeners; skipping notification");
            return Ok(leave);
        }

        let name = self.requester_name(requester.id).await;
        let event = NotificationEvent::new_leave_request(name.as_deref(), leave.id);
        self.broadcaster.broadcast(&event);

        Ok(leave)
    }

    /// The caller's own requests, latest start date first.
    pub async fn my_leaves(&self, ctx: &RequestContext) -> Result<Vec<LeaveRequest>, AppError> {
        let staff = ctx.staff_member()?;
        self.leaves.list_for_staff(staff.id).await
    }

    /// Every request with its requester, newest first.
    pub async fn list_all(&self) -> Result<Vec<LeaveWithRequester>, AppError> {
        self.leaves.list_all().await
    }

    /// Records an `Approved` or `Rejected` decision.
    ///
    /// Approval moves the requester to `on-leave` in the same write.
    pub async fn decide(
        &self,
        ctx: &RequestContext,
        leave_id: Uuid,
        status: LeaveStatus,
    ) -> Result<LeaveRequest, AppError> {
        if !status.is_decision() {
            return Err(AppError::validation(
                "Invalid status. Must be Approved or Rejected",
            ));
        }

        let leave = self
            .leaves
            .apply_decision(leave_id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Leave request not found"))?;

        info!(
            leave_id = %leave.id,
            status = %leave.status,
            reviewer_id = %ctx.principal_id(),
            "Leave request decided"
        );

        Ok(leave)
    }

    async fn requester_name(&self, staff_member_id: Uuid) -> Option<String> {
        match self.staff.find_by_id(staff_member_id).await {
            Ok(Some(staff)) => Some(staff.full_name()),
            Ok(None) => {
                warn!(%staff_member_id, "Requester vanished before notification");
                None
            }
            Err(e) => {
                warn!(%staff_member_id, error = %e, "Could not read requester for notification");
                None
            }
        }
    }
}
