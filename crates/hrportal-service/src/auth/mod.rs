//! Registration, login and credential management.

pub mod service;

pub use service::{AuthService, AuthSession, RegisterAdminInput, RegisterInput};
