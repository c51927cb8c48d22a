//! Storage port for user records.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::User;
use crate::error::Result;

/// Row data for inserting a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Port for user persistence.
///
/// Implementations must enforce email uniqueness atomically: when two
/// writers race on the same email, exactly one `create` succeeds and the
/// loser gets [`Error::Constraint`](crate::error::Error::Constraint).
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Unordered snapshot of all users; callers apply any pagination.
    async fn find_all(&self) -> Result<Vec<User>>;

    async fn create(&self, new: NewUser) -> Result<User>;

    /// Applies a partial update and refreshes `updated_at`.
    /// Fails with `NotFound` when the id is absent.
    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<User>;

    /// Deletes a user. A missing id is a no-op; the manager layer is
    /// responsible for 404 semantics.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Cheap connectivity probe for health checks.
    async fn ping(&self) -> Result<()>;
}
