//! Claims carried by every bearer token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hrportal_entity::principal::PrincipalKind;

/// Token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the principal id within its own store.
    pub sub: Uuid,
    /// Which store `sub` belongs to. Absent only in tokens minted before
    /// the kind claim existed; such tokens are rejected on decode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PrincipalKind>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

