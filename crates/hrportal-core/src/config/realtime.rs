//! Real-time listener configuration.

use serde::{Deserialize, Serialize};

/// Real-time (WebSocket) listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Outbound frames buffered per listener before sends start failing.
    #[serde(default = "default_listener_buffer")]
    pub listener_buffer_size: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            listener_buffer_size: default_listener_buffer(),
        }
    }
}

fn default_listener_buffer() -> usize {
    64
}
