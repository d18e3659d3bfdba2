//! Authenticated identities.
//!
//! A [`Principal`] is either an [`Account`](crate::account::Account) or a
//! [`StaffMember`](crate::staff::StaffMember). The two live in disjoint
//! stores, so the variant ([`PrincipalKind`]) travels with every token.

pub mod kind;
pub mod model;
pub mod role;
pub mod secret;

pub use kind::PrincipalKind;
pub use model::Principal;
pub use role::Role;
pub use secret::{PasswordDigest, SecretHasher};
