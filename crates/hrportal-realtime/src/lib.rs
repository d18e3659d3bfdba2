//! # hrportal-realtime
//!
//! Broadcast relay from server-side state changes to every connected
//! real-time listener. Connection-scoped only: no persistence, no replay,
//! no per-listener queues beyond the outbound channel buffer.

pub mod bus;
pub mod event;
pub mod listener;

pub use bus::{Broadcaster, NotificationBus};
pub use event::NotificationEvent;
pub use listener::{ListenerHandle, ListenerId, ListenerState};
