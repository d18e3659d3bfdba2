//! The notification bus.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use hrportal_core::config::realtime::RealtimeConfig;

use crate::event::NotificationEvent;
use crate::listener::{ListenerHandle, ListenerId, ListenerRegistry};

/// The only capability handlers get: fan an event out to open listeners.
pub trait Broadcaster: Send + Sync {
    /// Deliver `event` to every open listener. Never fails; returns how
    /// many listeners accepted the frame.
    fn broadcast(&self, event: &NotificationEvent) -> usize;

    /// Whether any listener is currently `Open`.
    fn has_open_listeners(&self) -> bool;
}

/// Owns the listener registry for the lifetime of the server.
#[derive(Debug)]
pub struct NotificationBus {
    registry: ListenerRegistry,
    buffer_size: usize,
}

impl NotificationBus {
    /// Creates a bus with the configured per-listener buffer.
    pub fn new(config: &RealtimeConfig) -> Self {
        Self {
            registry: ListenerRegistry::new(),
            buffer_size: config.listener_buffer_size.max(1),
        }
    }

    /// Registers a new listener in the `Connecting` state.
    ///
    /// The caller forwards frames from the returned receiver to the socket
    /// and calls [`ListenerHandle::mark_open`] once it is ready.
    pub fn connect(&self) -> (Arc<ListenerHandle>, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(self.buffer_size);
        let handle = Arc::new(ListenerHandle::new(tx));
        self.registry.insert(handle.clone());
        debug!(listener_id = %handle.id, "Listener registered");
        (handle, rx)
    }

    /// Closes and forgets a listener.
    pub fn disconnect(&self, id: &ListenerId) {
        if let Some(handle) = self.registry.remove(id) {
            handle.mark_closed();
            debug!(listener_id = %id, "Listener unregistered");
        }
    }

    /// Number of listeners in the `Open` state.
    pub fn open_listeners(&self) -> usize {
        self.registry
            .snapshot()
            .iter()
            .filter(|handle| handle.is_open())
            .count()
    }

    /// Closes every listener. Used on shutdown.
    pub fn close_all(&self) {
        let listeners = self.registry.snapshot();
        for handle in &listeners {
            self.disconnect(&handle.id);
        }
        info!(count = listeners.len(), "Closed all real-time listeners");
    }
}

impl Broadcaster for NotificationBus {
    fn broadcast(&self, event: &NotificationEvent) -> usize {
        let frame = match serde_json::to_string(event) {
            Ok(frame) => frame,
            Err(e) => {
                error!(error = %e, event_type = event.event_type(), "Failed to serialize event");
                return 0;
            }
        };

        let mut delivered = 0;
        for handle in self.registry.snapshot() {
            if handle.try_send(frame.clone()) {
                delivered += 1;
            } else {
                debug!(
                    listener_id = %handle.id,
                    state = ?handle.state(),
                    "Listener skipped"
                );
            }
        }

        info!(
            event_type = event.event_type(),
            delivered,
            "Broadcast notification"
        );
        delivered
    }

    fn has_open_listeners(&self) -> bool {
        self.registry.snapshot().iter().any(|handle| handle.is_open())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::listener::ListenerState;

    fn bus() -> NotificationBus {
        NotificationBus::new(&RealtimeConfig::default())
    }

    #[tokio::test]
    async fn test_only_open_listeners_receive() {
        let bus = bus();
        let (open, mut open_rx) = bus.connect();
        open.mark_open();
        let (_connecting, mut connecting_rx) = bus.connect();
        let (closed, mut closed_rx) = bus.connect();
        closed.mark_open();
        closed.mark_closed();

        let event = NotificationEvent::new_leave_request(Some("Ada"), Uuid::new_v4());
        assert_eq!(bus.broadcast(&event), 1);

        let frame = open_rx.recv().await.unwrap();
        let received: NotificationEvent = serde_json::from_str(&frame).unwrap();
        assert_eq!(received, event);
        assert!(connecting_rx.try_recv().is_err());
        assert!(closed_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_each_open_listener_gets_exactly_one_frame() {
        let bus = bus();
        let mut receivers = Vec::new();
        for _ in 0..3 {
            let (handle, rx) = bus.connect();
            handle.mark_open();
            receivers.push(rx);
        }

        bus.broadcast(&NotificationEvent::new_leave_request(None, Uuid::new_v4()));

        for rx in &mut receivers {
            assert!(rx.recv().await.is_some());
            assert!(rx.try_recv().is_err());
        }
    }

    #[test]
    fn test_half_closed_listener_does_not_fail_broadcast() {
        let bus = bus();
        let (handle, rx) = bus.connect();
        handle.mark_open();
        drop(rx);

        let delivered = bus.broadcast(&NotificationEvent::new_leave_request(None, Uuid::new_v4()));
        assert_eq!(delivered, 0);
        assert_eq!(handle.state(), ListenerState::Closed);
    }

    #[test]
    fn test_has_open_listeners_ignores_connecting() {
        let bus = bus();
        assert!(!bus.has_open_listeners());

        let (handle, _rx) = bus.connect();
        assert!(!bus.has_open_listeners());

        handle.mark_open();
        assert!(bus.has_open_listeners());
    }

    #[test]
    fn test_disconnect_closes_and_removes() {
        let bus = bus();
        let (handle, _rx) = bus.connect();
        handle.mark_open();
        assert_eq!(bus.open_listeners(), 1);

        bus.disconnect(&handle.id);
        assert_eq!(handle.state(), ListenerState::Closed);
        assert_eq!(bus.open_listeners(), 0);
    }

    #[test]
    fn test_concurrent_connects_and_broadcasts() {
        let bus = Arc::new(bus());
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let bus = bus.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let (handle, _rx) = bus.connect();
                        handle.mark_open();
                        bus.broadcast(&NotificationEvent::new_leave_request(None, Uuid::new_v4()));
                        bus.disconnect(&handle.id);
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }
        assert_eq!(bus.open_listeners(), 0);
    }
}
