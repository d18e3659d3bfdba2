//! Shared fixtures for service unit tests.

use std::sync::{Arc, Mutex};

use hrportal_auth::{JwtEncoder, PasswordHasher, PasswordValidator};
use hrportal_core::config::auth::AuthConfig;
use hrportal_database::Stores;
use hrportal_realtime::{Broadcaster, NotificationEvent};

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        signing_secret: "unit-test-secret".into(),
        hash_memory_kib: 1024,
        hash_iterations: 1,
        ..AuthConfig::default()
    }
}

pub fn hasher() -> Arc<PasswordHasher> {
    Arc::new(PasswordHasher::new(&auth_config()).unwrap())
}

pub fn validator() -> Arc<PasswordValidator> {
    Arc::new(PasswordValidator::new(&auth_config()))
}

pub fn encoder() -> Arc<JwtEncoder> {
    Arc::new(JwtEncoder::new(&auth_config()).unwrap())
}

pub fn stores() -> Stores {
    Stores::memory()
}

/// Records every event instead of sending it anywhere.
#[derive(Default)]
pub struct RecordingBroadcaster {
    pub events: Mutex<Vec<NotificationEvent>>,
    /// Report no open listeners.
    pub offline: bool,
}

impl RecordingBroadcaster {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }
}

impl Broadcaster for RecordingBroadcaster {
    fn broadcast(&self, event: &NotificationEvent) -> usize {
        self.events.lock().unwrap().push(event.clone());
        1
    }

    fn has_open_listeners(&self) -> bool {
        !self.offline
    }
}
