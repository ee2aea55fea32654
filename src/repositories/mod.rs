//! Repository layer for user persistence.
//!
//! Services talk to the store through [`UserStore`] so the backend is chosen
//! once at startup and injected, never looked up globally.

pub mod memory;
pub mod user_repository;

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::User;

pub use memory::InMemoryUserRepository;
pub use user_repository::PgUserRepository;

/// Persistence gateway for [`User`] records.
///
/// Absence is reported as `Ok(None)`, never as an error.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert `user`, ignoring any identifier it carries, and return it with
    /// the identifier assigned by the store. Duplicate usernames are accepted.
    async fn create(&self, user: User) -> Result<User, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// All users, in whatever order the store yields them.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// First user (lowest id) with this exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Overwrite every field of the row identified by `user.id`.
    ///
    /// Returns `Ok(None)` when the user has no id or the row does not exist;
    /// nothing is inserted in that case.
    async fn update(&self, user: User) -> Result<Option<User>, StoreError>;

    /// Remove the row with this id. Deleting a missing id is a no-op.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
