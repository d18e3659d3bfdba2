//! Token creation with configurable signing secret and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use uuid::Uuid;

use hrportal_core::config::auth::AuthConfig;
use hrportal_core::error::AppError;
use hrportal_entity::principal::PrincipalKind;

use super::claims::Claims;

/// Creates signed bearer tokens (HS256).
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl: chrono::Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").field("ttl", &self.ttl).finish()
    }
}

/// A freshly issued token.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// The compact token string.
    pub token: String,
    /// When the token stops verifying.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let ttl = chrono::Duration::from_std(config.token_ttl()?)
            .map_err(|e| AppError::configuration(format!("Token TTL out of range: {e}")))?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.signing_secret.as_bytes()),
            ttl,
        })
    }

    /// Issues a token for the principal, expiring after the configured TTL.
    pub fn issue(&self, principal_id: Uuid, kind: PrincipalKind) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Token expiry is out of range"))?;

        let claims = Claims {
            sub: principal_id,
            kind: Some(kind),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(IssuedToken {
            token: self.sign(&claims)?,
            expires_at,
        })
    }

    /// Signs arbitrary claims with the server secret.
    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_ttl(ttl: &str) -> AuthConfig {
        AuthConfig {
            signing_secret: "encoder-test-secret".to_string(),
            token_ttl: ttl.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_issue_sets_expiry_from_ttl() {
        let encoder = JwtEncoder::new(&config_with_ttl("1h")).unwrap();
        let before = Utc::now();
        let issued = encoder
            .issue(Uuid::new_v4(), PrincipalKind::StaffMember)
            .unwrap();

        let lifetime = issued.expires_at - before;
        assert!(lifetime <= chrono::Duration::hours(1) + chrono::Duration::seconds(1));
        assert!(lifetime >= chrono::Duration::minutes(59));
        assert!(!issued.token.is_empty());
    }

    #[test]
    fn test_huge_ttl_is_rejected_at_construction() {
        assert!(JwtEncoder::new(&config_with_ttl("100000000d")).is_err());
    }

    #[test]
    fn test_issue_reports_overflowing_expiry_as_error() {
        let encoder = JwtEncoder {
            encoding_key: EncodingKey::from_secret(b"encoder-test-secret"),
            ttl: chrono::Duration::MAX,
        };

        let err = encoder
            .issue(Uuid::new_v4(), PrincipalKind::Account)
            .unwrap_err();
        assert!(err.kind.is_internal());
    }
}
