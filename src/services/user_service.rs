//! User service for CRUD operations over an injected [`UserStore`].

use std::sync::Arc;

use log::{debug, info};

use crate::errors::StoreError;
use crate::models::User;
use crate::repositories::UserStore;
use crate::utils::log_sanitizer::{MaskedEmail, MaskedUsername};

pub struct UserService {
    repository: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserStore>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, user: User) -> Result<User, StoreError> {
        debug!("Creating user: {}", MaskedUsername(&user.username));
        if let Some(email) = user.email.as_deref() {
            debug!("New user email: {}", MaskedEmail(email));
        }
        let created = self.repository.create(user).await?;
        info!("Created user with id: {:?}", created.id);
        Ok(created)
    }

    pub async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        debug!("Fetching user by ID: {}", id);
        self.repository.find_by_id(id).await
    }

    pub async fn find_all_users(&self) -> Result<Vec<User>, StoreError> {
        self.repository.find_all().await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        debug!("Fetching user by username: {}", MaskedUsername(username));
        self.repository.find_by_username(username).await
    }

    /// Full overwrite of an existing user; `Ok(None)` if the row is gone.
    pub async fn update_user(&self, user: User) -> Result<Option<User>, StoreError> {
        debug!("Updating user: {:?}", user.id);
        self.repository.update(user).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        if self.repository.find_by_id(id).await?.is_some() {
            self.repository.delete(id).await?;
            info!("Deleted user: {}", id);
        }
        Ok(())
    }
}
