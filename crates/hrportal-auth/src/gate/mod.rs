//! The authentication and authorization gate.
//!
//! [`AuthGate::authenticate`] turns a bearer token into a [`Principal`];
//! [`AuthGate::authorize`] checks the principal's role against an allowed
//! set. Both fail before any handler logic runs.

use std::sync::Arc;

use tracing::debug;

use hrportal_core::error::AppError;
use hrportal_database::store::{AccountStore, StaffStore};
use hrportal_entity::principal::{Principal, PrincipalKind, Role};

use crate::jwt::{JwtDecoder, TokenError};

/// Resolves tokens to principals and enforces role membership.
#[derive(Clone)]
pub struct AuthGate {
    decoder: Arc<JwtDecoder>,
    accounts: Arc<dyn AccountStore>,
    staff: Arc<dyn StaffStore>,
}

impl AuthGate {
    /// Creates a gate over the two credential stores.
    pub fn new(
        decoder: Arc<JwtDecoder>,
        accounts: Arc<dyn AccountStore>,
        staff: Arc<dyn StaffStore>,
    ) -> Self {
        Self {
            decoder,
            accounts,
            staff,
        }
    }

    /// Verifies the token and loads the principal it names.
    ///
    /// The lookup is dispatched purely on the token's principal kind. A
    /// principal that no longer exists is `Unauthenticated` even though the
    /// token itself verified.
    pub async fn authenticate(&self, token: Option<&str>) -> Result<Principal, AppError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthenticated("Access denied. No token provided."))?;

        let verified = self.decoder.verify(token).map_err(|e| {
            debug!(reason = %e, "Token rejected");
            AppError::unauthenticated(token_error_message(e))
        })?;

        let principal = match verified.kind {
            PrincipalKind::StaffMember => self
                .staff
                .find_by_id(verified.principal_id)
                .await?
                .map(Principal::StaffMember),
            PrincipalKind::Account => self
                .accounts
                .find_by_id(verified.principal_id)
                .await?
                .map(Principal::Account),
        };

        principal.ok_or_else(|| {
            debug!(
                principal_id = %verified.principal_id,
                kind = %verified.kind,
                "Token names a principal that no longer exists"
            );
            AppError::unauthenticated("Access denied. User not found.")
        })
    }

    /// Checks that an authenticated principal holds one of `allowed`.
    ///
    /// Exact, case-sensitive role match; there is no role hierarchy.
    pub fn authorize(principal: Option<&Principal>, allowed: &[Role]) -> Result<(), AppError> {
        let principal = principal
            .ok_or_else(|| AppError::unauthenticated("Access denied. Not authenticated."))?;

        let role = principal.role();
        if allowed.contains(&role) {
            return Ok(());
        }

        let required = allowed
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Err(AppError::forbidden(format!(
            "Access denied. Required roles: {required}. Your role: {role}"
        )))
    }
}

fn token_error_message(error: TokenError) -> &'static str {
    match error {
        TokenError::Malformed => "Access denied. Invalid token.",
        TokenError::Expired => "Access denied. Token expired.",
        TokenError::MissingKind => "Access denied. Token is outdated. Please log in again.",
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use hrportal_core::ErrorKind;
    use hrportal_core::config::auth::AuthConfig;
    use hrportal_database::MemoryStore;
    use hrportal_entity::account::NewAccount;
    use hrportal_entity::principal::PasswordDigest;
    use hrportal_entity::staff::{EmploymentStatus, NewStaffMember};

    use super::*;
    use crate::jwt::{Claims, JwtEncoder};

    struct Fixture {
        store: Arc<MemoryStore>,
        gate: AuthGate,
        encoder: JwtEncoder,
    }

    fn fixture() -> Fixture {
        let config = AuthConfig {
            signing_secret: "gate-secret".into(),
            ..AuthConfig::default()
        };
        let store = Arc::new(MemoryStore::new());
        let gate = AuthGate::new(
            Arc::new(JwtDecoder::new(&config)),
            store.clone(),
            store.clone(),
        );
        Fixture {
            store,
            gate,
            encoder: JwtEncoder::new(&config).unwrap(),
        }
    }

    fn digest() -> PasswordDigest {
        PasswordDigest::parse("$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaA").unwrap()
    }

    fn new_staff(email: &str, role: Role) -> NewStaffMember {
        NewStaffMember {
            employee_code: None,
            first_name: "Tom".into(),
            last_name: "Mugisha".into(),
            email: email.into(),
            password_hash: digest(),
            role,
            date_of_birth: None,
            hire_date: None,
            position: None,
            status: EmploymentStatus::Active,
            department_id: None,
        }
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthenticated() {
        let f = fixture();
        let err = f.gate.authenticate(None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
        assert_eq!(err.message, "Access denied. No token provided.");
    }

    #[tokio::test]
    async fn test_staff_token_resolves_staff_member() {
        let f = fixture();
        let staff = StaffStore::create(&*f.store, &new_staff("tom@example.com", Role::Employee))
            .await
            .unwrap();
        let issued = f.encoder.issue(staff.id, PrincipalKind::StaffMember).unwrap();

        let principal = f.gate.authenticate(Some(&issued.token)).await.unwrap();
        assert_eq!(principal.kind(), PrincipalKind::StaffMember);
        assert_eq!(principal.id(), staff.id);
    }

    #[tokio::test]
    async fn test_kind_selects_store_not_id() {
        let f = fixture();
        let staff = StaffStore::create(&*f.store, &new_staff("tom@example.com", Role::Admin))
            .await
            .unwrap();
        // Same id presented as an Account must not fall through to staff.
        let issued = f.encoder.issue(staff.id, PrincipalKind::Account).unwrap();

        let err = f.gate.authenticate(Some(&issued.token)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
        assert_eq!(err.message, "Access denied. User not found.");
    }

    #[tokio::test]
    async fn test_deleted_principal_is_unauthenticated() {
        let f = fixture();
        let staff = StaffStore::create(&*f.store, &new_staff("gone@example.com", Role::Employee))
            .await
            .unwrap();
        let issued = f.encoder.issue(staff.id, PrincipalKind::StaffMember).unwrap();
        StaffStore::delete(&*f.store, staff.id).await.unwrap();

        let err = f.gate.authenticate(Some(&issued.token)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn test_account_token_resolves_account() {
        let f = fixture();
        let account = AccountStore::create(
            &*f.store,
            &NewAccount {
                username: "root".into(),
                email: "root@example.com".into(),
                password_hash: digest(),
                role: Role::Admin,
            },
        )
        .await
        .unwrap();
        let issued = f.encoder.issue(account.id, PrincipalKind::Account).unwrap();

        let principal = f.gate.authenticate(Some(&issued.token)).await.unwrap();
        assert_eq!(principal.kind(), PrincipalKind::Account);
        assert_eq!(principal.role(), Role::Admin);
    }

    #[tokio::test]
    async fn test_failure_kinds_have_distinct_messages() {
        let f = fixture();
        let now = Utc::now().timestamp();
        let expired = f
            .encoder
            .sign(&Claims {
                sub: Uuid::new_v4(),
                kind: Some(PrincipalKind::Account),
                iat: now - 20,
                exp: now - 10,
            })
            .unwrap();
        let legacy = f
            .encoder
            .sign(&Claims {
                sub: Uuid::new_v4(),
                kind: None,
                iat: now,
                exp: now + 60,
            })
            .unwrap();

        let expired = f.gate.authenticate(Some(&expired)).await.unwrap_err();
        let legacy = f.gate.authenticate(Some(&legacy)).await.unwrap_err();
        let garbage = f.gate.authenticate(Some("abc")).await.unwrap_err();

        assert_eq!(expired.message, "Access denied. Token expired.");
        assert_eq!(garbage.message, "Access denied. Invalid token.");
        assert_eq!(legacy.kind, ErrorKind::Unauthenticated);
        assert_ne!(legacy.message, garbage.message);
    }

    #[tokio::test]
    async fn test_authorize_exact_membership() {
        let f = fixture();
        let hr = StaffStore::create(&*f.store, &new_staff("hr@example.com", Role::Hr))
            .await
            .unwrap();
        let hr = Principal::StaffMember(hr);

        let err = AuthGate::authorize(Some(&hr), &[Role::Admin]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(
            err.message,
            "Access denied. Required roles: Admin. Your role: HR"
        );

        assert!(AuthGate::authorize(Some(&hr), &[Role::Admin, Role::Hr]).is_ok());
    }

    #[test]
    fn test_authorize_without_principal_is_unauthenticated() {
        let err = AuthGate::authorize(None, &[Role::Admin]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }
}
