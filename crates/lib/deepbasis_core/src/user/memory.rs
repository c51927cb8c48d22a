//! In-memory user store.
//!
//! Honors the same contract as [`PgUserStore`](super::postgres::PgUserStore),
//! including atomic email uniqueness, so the manager layers can be tested
//! without a database. Also used by the API router tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::model::User;
use super::store::{NewUser, UserPatch, UserStore};
use crate::error::{Error, Result};

/// Mutex-guarded map of users keyed by id.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.values().cloned().collect())
    }

    async fn create(&self, new: NewUser) -> Result<User> {
        // The check and the insert happen under one lock, matching the
        // atomicity of the SQL unique index.
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == new.email) {
            return Err(Error::Constraint("users.email".into()));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if let Some(email) = &patch.email
            && users.values().any(|u| u.email == *email && u.id != id)
        {
            return Err(Error::Constraint("users.email".into()));
        }
        let user = users
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound("User not found".into()))?;
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(password_hash) = patch.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        users.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
