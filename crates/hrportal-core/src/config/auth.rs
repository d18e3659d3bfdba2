//! Authentication configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token signing and password hashing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_signing_secret")]
    pub signing_secret: String,
    /// Token lifetime, e.g. `"7d"`, `"12h"`, `"30m"`, `"45s"` or plain seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl: String,
    /// Clock skew tolerated when checking expiry, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Admin account created at startup when no account has its email.
    #[serde(default)]
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// Credentials for the startup admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapAdmin {
    /// Display username.
    pub username: String,
    /// Login email.
    pub email: String,
    /// Initial password.
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signing_secret: default_signing_secret(),
            token_ttl: default_token_ttl(),
            leeway_seconds: 0,
            password_min_length: default_password_min(),
            hash_memory_kib: default_hash_memory(),
            hash_iterations: default_hash_iterations(),
            bootstrap_admin: None,
        }
    }
}

impl AuthConfig {
    /// Parsed token lifetime.
    pub fn token_ttl(&self) -> Result<Duration, AppError> {
        parse_ttl(&self.token_ttl)
    }
}

/// Longest accepted token lifetime (ten years).
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(3_650 * 24 * 60 * 60);

/// Parse a lifetime such as `7d`, `12h`, `30m`, `45s` or `3600`.
///
/// Lifetimes above [`MAX_TOKEN_TTL`] are rejected.
pub fn parse_ttl(raw: &str) -> Result<Duration, AppError> {
    let raw = raw.trim();
    let invalid = || AppError::configuration(format!("Invalid token TTL '{raw}'"));

    let split = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(split);
    let amount: u64 = digits.parse().map_err(|_| invalid())?;

    let multiplier = match unit {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        _ => return Err(invalid()),
    };

    if amount == 0 {
        return Err(invalid());
    }

    let ttl = amount
        .checked_mul(multiplier)
        .map(Duration::from_secs)
        .ok_or_else(invalid)?;

    if ttl > MAX_TOKEN_TTL {
        return Err(AppError::configuration(format!(
            "Token TTL '{raw}' exceeds the maximum of {} days",
            MAX_TOKEN_TTL.as_secs() / 86_400
        )));
    }

    Ok(ttl)
}

fn default_signing_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> String {
    "7d".to_string()
}

fn default_password_min() -> usize {
    6
}

fn default_hash_memory() -> u32 {
    19 * 1024
}

fn default_hash_iterations() -> u32 {
    2
}
