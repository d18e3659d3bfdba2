//! Events pushed to listeners.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ephemeral `{type, payload}` event. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationEvent {
    /// A staff member filed a leave request.
    #[serde(rename_all = "camelCase")]
    NewLeaveRequest {
        /// Human-readable summary naming the requester.
        message: String,
        /// The new leave request.
        leave_id: Uuid,
    },
}

impl NotificationEvent {
    /// Fallback used when the requester's name cannot be read.
    pub const UNKNOWN_REQUESTER: &'static str = "an employee";

    /// Build the leave-request event for a requester display name.
    pub fn new_leave_request(requester: Option<&str>, leave_id: Uuid) -> Self {
        let name = requester
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(Self::UNKNOWN_REQUESTER);
        Self::NewLeaveRequest {
            message: format!("New leave request from {name}."),
            leave_id,
        }
    }

    /// The wire `type` string.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::NewLeaveRequest { .. } => "NEW_LEAVE_REQUEST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let id = Uuid::new_v4();
        let event = NotificationEvent::new_leave_request(Some("Ada Okello"), id);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "NEW_LEAVE_REQUEST");
        assert_eq!(json["payload"]["message"], "New leave request from Ada Okello.");
        assert_eq!(json["payload"]["leaveId"], id.to_string());
    }

    #[test]
    fn test_missing_name_falls_back() {
        let event = NotificationEvent::new_leave_request(None, Uuid::new_v4());
        let NotificationEvent::NewLeaveRequest { message, .. } = event;
        assert_eq!(message, "New leave request from an employee.");

        let event = NotificationEvent::new_leave_request(Some("  "), Uuid::new_v4());
        assert_eq!(event.event_type(), "NEW_LEAVE_REQUEST");
    }
}
