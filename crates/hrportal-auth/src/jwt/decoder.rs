//! Token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;
use uuid::Uuid;

use hrportal_core::config::auth::AuthConfig;
use hrportal_entity::principal::PrincipalKind;

use super::claims::Claims;

/// Why a token failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Unparseable, wrongly signed, or missing required claims.
    #[error("token is malformed or its signature is invalid")]
    Malformed,
    /// Validly signed but past its expiry.
    #[error("token has expired")]
    Expired,
    /// Validly signed but carries no principal kind.
    #[error("token does not carry a principal kind")]
    MissingKind,
}

/// The identity a verified token asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedToken {
    /// Principal id.
    pub principal_id: Uuid,
    /// Store the id belongs to.
    pub kind: PrincipalKind,
}

/// Verifies bearer tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.signing_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies signature and expiry, then requires a principal kind.
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?
            .claims;

        let kind = claims.kind.ok_or(TokenError::MissingKind)?;

        Ok(VerifiedToken {
            principal_id: claims.sub,
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::jwt::encoder::JwtEncoder;

    fn config() -> AuthConfig {
        AuthConfig {
            signing_secret: "test-secret".into(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_issue_then_verify_round_trips_identity() {
        let encoder = JwtEncoder::new(&config()).unwrap();
        let decoder = JwtDecoder::new(&config());
        let id = Uuid::new_v4();

        let issued = encoder.issue(id, PrincipalKind::StaffMember).unwrap();
        let verified = decoder.verify(&issued.token).unwrap();

        assert_eq!(verified.principal_id, id);
        assert_eq!(verified.kind, PrincipalKind::StaffMember);
    }

    #[test]
    fn test_default_expiry_is_seven_days_out() {
        let encoder = JwtEncoder::new(&config()).unwrap();
        let issued = encoder.issue(Uuid::new_v4(), PrincipalKind::Account).unwrap();
        let hours = (issued.expires_at - Utc::now()).num_hours();
        assert!((167..=168).contains(&hours));
    }

    #[test]
    fn test_expired_token_is_rejected_as_expired() {
        let encoder = JwtEncoder::new(&config()).unwrap();
        let now = Utc::now().timestamp();
        let token = encoder
            .sign(&Claims {
                sub: Uuid::new_v4(),
                kind: Some(PrincipalKind::Account),
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();

        assert_eq!(
            JwtDecoder::new(&config()).verify(&token),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_token_without_kind_is_rejected() {
        let encoder = JwtEncoder::new(&config()).unwrap();
        let now = Utc::now().timestamp();
        let token = encoder
            .sign(&Claims {
                sub: Uuid::new_v4(),
                kind: None,
                iat: now,
                exp: now + 3600,
            })
            .unwrap();

        assert_eq!(
            JwtDecoder::new(&config()).verify(&token),
            Err(TokenError::MissingKind)
        );
    }

    #[test]
    fn test_wrong_secret_is_malformed() {
        let encoder = JwtEncoder::new(&config()).unwrap();
        let issued = encoder.issue(Uuid::new_v4(), PrincipalKind::Account).unwrap();

        let other = AuthConfig {
            signing_secret: "another-secret".into(),
            ..AuthConfig::default()
        };
        assert_eq!(
            JwtDecoder::new(&other).verify(&issued.token),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        let decoder = JwtDecoder::new(&config());
        assert_eq!(decoder.verify("not.a.token"), Err(TokenError::Malformed));
        assert_eq!(decoder.verify(""), Err(TokenError::Malformed));
    }
}
