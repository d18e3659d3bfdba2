//! Listener connections and their registry.

pub mod handle;
pub mod registry;

pub use handle::{ListenerHandle, ListenerId, ListenerState};
pub use registry::ListenerRegistry;
