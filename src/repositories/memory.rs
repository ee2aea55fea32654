//! In-process user store.
//!
//! Identifiers come from a counter that only moves forward, so an id is never
//! handed out twice even after the row holding it is deleted.

use std::collections::BTreeMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::User;
use crate::repositories::UserStore;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, User>,
}

/// User store kept in memory, selected with `DATABASE_URL=memory://`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, StoreError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        let created = user.with_id(id);
        table.rows.insert(id, created.clone());
        debug!("Repository: Inserted user with id: {}", id);
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn update(&self, user: User) -> Result<Option<User>, StoreError> {
        let Some(id) = user.id else {
            return Ok(None);
        };

        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = user;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, email: Option<&str>) -> User {
        User {
            email: email.map(str::to_string),
            ..User::new(username)
        }
    }

    #[actix_web::test]
    async fn test_create_assigns_distinct_ids() {
        let store = InMemoryUserRepository::new();
        let first = store.create(user("alice", None)).await.unwrap();
        let second = store.create(user("bob", None)).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[actix_web::test]
    async fn test_create_ignores_supplied_id() {
        let store = InMemoryUserRepository::new();
        let created = store.create(user("alice", None).with_id(42)).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert!(store.find_by_id(42).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_ids_not_reused_after_delete() {
        let store = InMemoryUserRepository::new();
        let first = store.create(user("alice", None)).await.unwrap();
        store.delete(first.id.unwrap()).await.unwrap();
        let second = store.create(user("alice", None)).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[actix_web::test]
    async fn test_round_trip_find_by_id() {
        let store = InMemoryUserRepository::new();
        let created = store
            .create(user("alice", Some("alice@example.com")))
            .await
            .unwrap();

        let found = store.find_by_id(created.id.unwrap()).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[actix_web::test]
    async fn test_find_by_id_missing_returns_none() {
        let store = InMemoryUserRepository::new();
        assert!(store.find_by_id(99).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_find_by_username_returns_first_of_duplicates() {
        let store = InMemoryUserRepository::new();
        let first = store.create(user("dup", Some("one@example.com"))).await.unwrap();
        store.create(user("dup", Some("two@example.com"))).await.unwrap();

        let found = store.find_by_username("dup").await.unwrap();
        assert_eq!(found, Some(first));
        assert!(store.find_by_username("nobody").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_update_overwrites_all_fields() {
        let store = InMemoryUserRepository::new();
        let created = store
            .create(user("alice", Some("alice@example.com")))
            .await
            .unwrap();

        let replacement = user("alice2", None).with_id(created.id.unwrap());
        let updated = store.update(replacement.clone()).await.unwrap();

        assert_eq!(updated, Some(replacement.clone()));
        assert_eq!(
            store.find_by_id(created.id.unwrap()).await.unwrap(),
            Some(replacement)
        );
    }

    #[actix_web::test]
    async fn test_update_missing_row_inserts_nothing() {
        let store = InMemoryUserRepository::new();

        assert!(store.update(user("ghost", None).with_id(5)).await.unwrap().is_none());
        assert!(store.update(user("ghost", None)).await.unwrap().is_none());
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_delete_missing_is_noop() {
        let store = InMemoryUserRepository::new();
        store.create(user("alice", None)).await.unwrap();

        store.delete(12).await.unwrap();
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }
}
