//! # hrportal-auth
//!
//! Authentication and authorization for the HR portal.
//!
//! ## Modules
//!
//! - `password` - Argon2id password hashing and policy enforcement
//! - `jwt` - signed, expiring bearer tokens carrying principal id and kind
//! - `gate` - token-to-principal resolution and role membership checks

pub mod gate;
pub mod jwt;
pub mod password;

pub use gate::AuthGate;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError, VerifiedToken};
pub use password::{PasswordHasher, PasswordValidator};
