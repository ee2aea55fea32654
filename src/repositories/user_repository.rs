//! PostgreSQL-backed user repository.
//!
//! Every operation is a single statement against the `users` table; the
//! schema lives in `migrations/` and is applied by [`PgUserRepository::migrate`].

use async_trait::async_trait;
use log::{debug, info};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::errors::StoreError;
use crate::models::User;
use crate::repositories::UserStore;

const USER_COLUMNS: &str = "id, username, email, first_name, last_name";

/// Repository for user rows in PostgreSQL.
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply pending schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        info!("Running database migrations...");
        sqlx::migrate!().run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn create(&self, user: User) -> Result<User, StoreError> {
        let created = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, email, first_name, last_name) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .fetch_one(&self.pool)
        .await?;

        debug!("Repository: Inserted user with id: {:?}", created.id);
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        debug!("Repository: Finding all users");
        Ok(
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users"))
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        debug!("Repository: Finding user by username");
        Ok(sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1 ORDER BY id LIMIT 1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn update(&self, user: User) -> Result<Option<User>, StoreError> {
        let Some(id) = user.id else {
            return Ok(None);
        };

        debug!("Repository: Updating user: {}", id);
        Ok(sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET username = $2, email = $3, first_name = $4, last_name = $5 \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        debug!("Repository: Deleting user: {}", id);
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
