/**
 * In-Memory Credential Store
 *
 * Keeps users in a `Vec` behind a `tokio::sync::RwLock`. Used by the test
 * suite and by local runs without `DATABASE_URL`. Contents are lost on
 * restart.
 */

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::backend::store::{CredentialStore, NewUser, StoreError, User};

#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Flip the admin flag of an existing user; returns false if absent
    pub async fn set_admin(&self, email: &str, is_admin: bool) -> bool {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|user| user.email == email) {
            Some(user) => {
                user.is_admin = is_admin;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        // Check and insert under one write guard.
        let mut users = self.users.write().await;
        if users.iter().any(|user| user.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: uuid::Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            is_admin: false,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }
}
