//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use hrportal_core::config::auth::AuthConfig;
use hrportal_core::error::AppError;
use hrportal_entity::principal::{PasswordDigest, SecretHasher};

/// Plaintext hashed once at startup so unknown-email logins still pay
/// for one verification.
const DUMMY_PASSWORD: &str = "hrportal-timing-equalizer";

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
    dummy_digest: String,
}

impl PasswordHasher {
    /// Creates a hasher with the configured Argon2 cost.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(config.hash_memory_kib, config.hash_iterations, 1, None)
            .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        let mut hasher = Self {
            params,
            dummy_digest: String::new(),
        };
        hasher.dummy_digest = hasher.hash_password(DUMMY_PASSWORD)?.into();
        Ok(hasher)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<PasswordDigest, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        PasswordDigest::parse(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not. The
    /// digest comparison is constant-time.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Runs one verification against a throwaway digest and discards the
    /// result. Used when no stored digest exists for a login attempt.
    pub fn burn_verification(&self, password: &str) {
        let _ = self.verify_password(password, &self.dummy_digest);
    }
}

impl SecretHasher for PasswordHasher {
    fn hash_secret(&self, plaintext: &str) -> hrportal_core::AppResult<PasswordDigest> {
        self.hash_password(plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        let config = AuthConfig {
            hash_memory_kib: 1024,
            hash_iterations: 1,
            ..AuthConfig::default()
        };
        PasswordHasher::new(&config).unwrap()
    }

    #[test]
    fn test_hash_then_verify_same_plaintext() {
        let hasher = hasher();
        let digest = hasher.hash_password("correct horse").unwrap();
        assert!(hasher.verify_password("correct horse", digest.as_str()).unwrap());
    }

    #[test]
    fn test_verify_different_plaintext_fails() {
        let hasher = hasher();
        let digest = hasher.hash_password("correct horse").unwrap();
        assert!(!hasher.verify_password("correct horsf", digest.as_str()).unwrap());
        assert!(!hasher.verify_password("", digest.as_str()).unwrap());
    }

    #[test]
    fn test_salts_differ_per_call() {
        let hasher = hasher();
        let a = hasher.hash_password("same").unwrap();
        let b = hasher.hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn test_garbage_digest_is_an_error() {
        let hasher = hasher();
        assert!(hasher.verify_password("x", "not-a-digest").is_err());
    }

    #[test]
    fn test_invalid_params_are_configuration_errors() {
        let config = AuthConfig {
            hash_memory_kib: 1,
            ..AuthConfig::default()
        };
        let err = PasswordHasher::new(&config).unwrap_err();
        assert_eq!(err.kind, hrportal_core::ErrorKind::Configuration);
    }
}
