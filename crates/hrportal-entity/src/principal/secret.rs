//! Password digests and the hashing seam.

use std::fmt;

use hrportal_core::AppResult;
use serde::{Deserialize, Serialize};

/// A one-way password digest in PHC string format (`$alg$params$salt$hash`).
///
/// There is no constructor that accepts plaintext: values come from a
/// [`SecretHasher`] or from [`PasswordDigest::parse`] on stored data.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Wrap an existing PHC string, rejecting anything that is not one.
    pub fn parse(phc: impl Into<String>) -> AppResult<Self> {
        let phc = phc.into();
        let segments = phc.split('$').filter(|s| !s.is_empty()).count();
        if !phc.starts_with('$') || segments < 3 {
            return Err(hrportal_core::AppError::internal(
                "Value is not a password digest",
            ));
        }
        Ok(Self(phc))
    }

    /// The PHC string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

impl TryFrom<String> for PasswordDigest {
    type Error = hrportal_core::AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PasswordDigest> for String {
    fn from(value: PasswordDigest) -> Self {
        value.0
    }
}

/// Produces password digests. Implemented by the auth crate's hasher.
pub trait SecretHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt.
    fn hash_secret(&self, plaintext: &str) -> AppResult<PasswordDigest>;
}
