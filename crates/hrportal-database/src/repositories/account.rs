//! Account repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use hrportal_core::result::AppResult;
use hrportal_entity::account::{Account, NewAccount};
use hrportal_entity::principal::PasswordDigest;

use super::db_error;
use crate::store::AccountStore;

/// Repository for the `accounts` table.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find account by id"))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE email = LOWER(TRIM($1))")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find account by email"))
    }

    async fn create(&self, data: &NewAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (id, username, email, password_hash, role) \
             VALUES ($1, $2, LOWER(TRIM($3)), $4, $5) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.username.trim())
        .bind(&data.email)
        .bind(data.password_hash.as_str())
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create account"))
    }

    async fn update_password(&self, id: Uuid, digest: &PasswordDigest) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE accounts SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(digest.as_str())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update account password"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_login(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE accounts SET last_login = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to record account login"))?;
        Ok(())
    }
}
