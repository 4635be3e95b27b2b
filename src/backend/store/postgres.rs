/**
 * Postgres Credential Store
 *
 * sqlx-backed implementation of `CredentialStore`. The pool is obtained
 * from the shared `Database` handle on every call, which connects on first
 * use and reuses the same pool afterwards.
 *
 * Duplicate emails are rejected by the `users_email_key` unique index; the
 * resulting unique violation is surfaced as `StoreError::DuplicateEmail`.
 */

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::backend::server::database::Database;
use crate::backend::store::{CredentialStore, NewUser, StoreError, User};

#[derive(Clone)]
pub struct PgCredentialStore {
    database: Arc<Database>,
}

impl PgCredentialStore {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let pool = self.database.pool().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, is_admin, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let pool = self.database.pool().await?;
        let id = uuid::Uuid::new_v4();
        let now = Utc::now();

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, is_admin, created_at)
            VALUES ($1, $2, $3, $4, FALSE, $5)
            RETURNING id, name, email, password_hash, is_admin, created_at
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .fetch_one(pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let pool = self.database.pool().await?;

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, is_admin, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}
