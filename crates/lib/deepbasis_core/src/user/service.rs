//! User manager — business rules over the user store.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use super::model::{CreateUser, UpdateUser, User};
use super::store::{NewUser, UserPatch, UserStore};
use crate::auth::password::hash_password;
use crate::error::{Error, Result};

/// Error message for a duplicate email, shared by the pre-check and the
/// constraint-race path so callers cannot tell which one fired.
pub const EMAIL_IN_USE: &str = "Email is already in use.";

/// Stateless orchestration over a [`UserStore`].
#[derive(Clone)]
pub struct UserManager {
    store: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserManager {
    pub fn new(store: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// Create a user: uniqueness pre-check, hash, persist.
    ///
    /// Two concurrent calls with the same email can both pass the pre-check;
    /// the store's unique index decides the winner and the loser's
    /// `Constraint` is remapped to the identical validation error.
    pub async fn create_user(&self, dto: CreateUser) -> Result<User> {
        if self.store.find_by_email(&dto.email).await?.is_some() {
            warn!(email = %dto.email, "registration conflict");
            return Err(Error::Validation(EMAIL_IN_USE.into()));
        }

        let password_hash = hash_password(&dto.password, self.bcrypt_cost)?;
        let user = match self
            .store
            .create(NewUser {
                name: dto.name,
                email: dto.email,
                password_hash,
            })
            .await
        {
            Err(Error::Constraint(_)) => {
                warn!("registration conflict (lost creation race)");
                return Err(Error::Validation(EMAIL_IN_USE.into()));
            }
            other => other?,
        };

        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.store.find_by_id(id).await
    }

    /// Partial update. An email change re-checks uniqueness against *other*
    /// users; a new password is re-hashed.
    pub async fn update_user(&self, id: Uuid, dto: UpdateUser) -> Result<User> {
        if let Some(email) = &dto.email
            && let Some(existing) = self.store.find_by_email(email).await?
            && existing.id != id
        {
            return Err(Error::Validation(EMAIL_IN_USE.into()));
        }

        let password_hash = match &dto.password {
            Some(password) => Some(hash_password(password, self.bcrypt_cost)?),
            None => None,
        };

        let patch = UserPatch {
            name: dto.name,
            email: dto.email,
            password_hash,
        };
        let user = match self.store.update(id, patch).await {
            Err(Error::Constraint(_)) => return Err(Error::Validation(EMAIL_IN_USE.into())),
            other => other?,
        };

        info!(user_id = %user.id, "user updated");
        Ok(user)
    }

    /// Delete a user; a missing id is a 404 at the boundary.
    pub async fn delete_user(&self, id: Uuid) -> Result<()> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(Error::NotFound("User not found".into()));
        }
        self.store.delete(id).await?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.store.find_all().await
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.store.find_by_email(email).await
    }
}
