//! A single real-time listener connection.

use std::sync::atomic::{AtomicU8, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Unique listener identifier.
pub type ListenerId = Uuid;

/// Lifecycle of a listener: `Connecting → Open → Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ListenerState {
    /// Registered but not yet ready to receive.
    Connecting = 0,
    /// Receives broadcasts.
    Open = 1,
    /// Terminal. Never receives again.
    Closed = 2,
}

impl ListenerState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Connecting,
            1 => Self::Open,
            _ => Self::Closed,
        }
    }
}

/// Handle to one listener's outbound channel.
#[derive(Debug)]
pub struct ListenerHandle {
    /// Listener id.
    pub id: ListenerId,
    /// When the listener connected.
    pub connected_at: DateTime<Utc>,
    sender: mpsc::Sender<String>,
    state: AtomicU8,
}

impl ListenerHandle {
    /// Create a handle in the `Connecting` state.
    pub fn new(sender: mpsc::Sender<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            connected_at: Utc::now(),
            sender,
            state: AtomicU8::new(ListenerState::Connecting as u8),
        }
    }

    /// Current state.
    pub fn state(&self) -> ListenerState {
        ListenerState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Whether broadcasts are delivered to this listener.
    pub fn is_open(&self) -> bool {
        self.state() == ListenerState::Open
    }

    /// `Connecting → Open`. Returns `false` if the listener already closed.
    pub fn mark_open(&self) -> bool {
        self.state
            .compare_exchange(
                ListenerState::Connecting as u8,
                ListenerState::Open as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
    }

    /// Move to `Closed`. Idempotent.
    pub fn mark_closed(&self) {
        self.state.store(ListenerState::Closed as u8, Ordering::SeqCst);
    }

    /// Queue a serialized frame without waiting.
    ///
    /// A full buffer drops the frame; a dropped receiver closes the listener.
    pub fn try_send(&self, frame: String) -> bool {
        if !self.is_open() {
            return false;
        }
        match self.sender.try_send(frame) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!(listener_id = %self.id, "Listener buffer full, dropping frame");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.mark_closed();
                false
            }
        }
    }
}
