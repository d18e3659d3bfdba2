//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "user": ... }` envelope.
#[derive(Debug, Clone, Serialize)]
pub struct UserEnvelope<T: Serialize> {
    /// The principal or record.
    pub user: T,
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"OK"` when the process answers.
    pub status: String,
    /// Free-form description.
    pub message: String,
    /// Server time of the probe.
    pub timestamp: DateTime<Utc>,
}
