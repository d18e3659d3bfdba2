//! The tagged principal union.

use hrportal_core::AppResult;
use serde::Serialize;
use uuid::Uuid;

use super::kind::PrincipalKind;
use super::role::Role;
use super::secret::SecretHasher;
use crate::account::Account;
use crate::staff::StaffMember;

/// An authenticated identity, tagged by the store it came from.
///
/// Serializes as the record's own fields plus a `kind` tag.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum Principal {
    /// An administrative account.
    Account(Account),
    /// An employee record.
    StaffMember(StaffMember),
}

impl Principal {
    /// Primary key within the principal's own store.
    pub fn id(&self) -> Uuid {
        match self {
            Self::Account(a) => a.id,
            Self::StaffMember(s) => s.id,
        }
    }

    /// Store discriminant carried in tokens.
    pub fn kind(&self) -> PrincipalKind {
        match self {
            Self::Account(_) => PrincipalKind::Account,
            Self::StaffMember(_) => PrincipalKind::StaffMember,
        }
    }

    /// Role used by the authorization gate.
    pub fn role(&self) -> Role {
        match self {
            Self::Account(a) => a.role,
            Self::StaffMember(s) => s.role,
        }
    }

    /// Login email (always lowercase).
    pub fn email(&self) -> &str {
        match self {
            Self::Account(a) => &a.email,
            Self::StaffMember(s) => &s.email,
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> String {
        match self {
            Self::Account(a) => a.username.clone(),
            Self::StaffMember(s) => s.full_name(),
        }
    }

    /// Stored password digest.
    pub fn password_hash(&self) -> &str {
        match self {
            Self::Account(a) => &a.password_hash,
            Self::StaffMember(s) => &s.password_hash,
        }
    }

    /// Replace the stored digest with a fresh hash of `plaintext`.
    ///
    /// Only the digest is kept; the hasher runs exactly once per call.
    pub fn set_password(&mut self, plaintext: &str, hasher: &dyn SecretHasher) -> AppResult<()> {
        let digest = hasher.hash_secret(plaintext)?;
        let slot = match self {
            Self::Account(a) => &mut a.password_hash,
            Self::StaffMember(s) => &mut s.password_hash,
        };
        *slot = digest.into();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::Utc;

    use super::*;
    use crate::principal::PasswordDigest;
    use crate::staff::EmploymentStatus;

    struct CountingHasher(AtomicUsize);

    impl SecretHasher for CountingHasher {
        fn hash_secret(&self, plaintext: &str) -> AppResult<PasswordDigest> {
            self.0.fetch_add(1, Ordering::SeqCst);
            PasswordDigest::parse(format!("$test$v=1${}", plaintext.len()))
        }
    }

    fn staff() -> StaffMember {
        let now = Utc::now();
        StaffMember {
            id: Uuid::new_v4(),
            employee_code: None,
            first_name: "Ada".into(),
            last_name: "Okello".into(),
            email: "ada@example.com".into(),
            password_hash: "$test$v=1$old".into(),
            role: Role::Employee,
            date_of_birth: None,
            hire_date: now.date_naive(),
            position: None,
            status: EmploymentStatus::Active,
            department_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_accessors_dispatch_on_variant() {
        let principal = Principal::StaffMember(staff());
        assert_eq!(principal.kind(), PrincipalKind::StaffMember);
        assert_eq!(principal.role(), Role::Employee);
        assert_eq!(principal.display_name(), "Ada Okello");
    }

    #[test]
    fn test_set_password_hashes_once_and_stores_digest() {
        let hasher = CountingHasher(AtomicUsize::new(0));
        let mut principal = Principal::StaffMember(staff());
        principal.set_password("newpass1", &hasher).unwrap();
        assert_eq!(hasher.0.load(Ordering::SeqCst), 1);
        assert_eq!(principal.password_hash(), "$test$v=1$8");
    }

    #[test]
    fn test_serialization_omits_password_hash() {
        let json = serde_json::to_value(Principal::StaffMember(staff())).unwrap();
        assert_eq!(json["kind"], "StaffMember");
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["firstName"], "Ada");
        assert!(json.get("profile").is_none());
    }
}
