//! Token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::{JwtDecoder, TokenError, VerifiedToken};
pub use encoder::{IssuedToken, JwtEncoder};
