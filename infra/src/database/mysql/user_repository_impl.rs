//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use order_core::domain::entities::user::User;
use order_core::errors::DomainError;
use order_core::repositories::UserRepository;

use super::{column_error, persistence_error};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(|e| column_error("id", e))?,
            user_name: row
                .try_get("user_name")
                .map_err(|e| column_error("user_name", e))?,
            email: row.try_get("email").map_err(|e| column_error("email", e))?,
            password_hash: row
                .try_get("password")
                .map_err(|e| column_error("password", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_error("updated_at", e))?,
            deleted_at: row
                .try_get::<Option<DateTime<Utc>>, _>("deleted_at")
                .map_err(|e| column_error("deleted_at", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_login(
        &self,
        user_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, DomainError> {
        // NULL never compares equal, so an absent identifier matches nothing
        let query = r#"
            SELECT id, user_name, email, password, created_at, updated_at, deleted_at
            FROM users
            WHERE (user_name = ? OR email = ?) AND deleted_at IS NULL
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(user_name)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence_error("Failed to find user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (user_name, email, password, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.user_name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::validation("user_name", "User already registered")
                }
                other => persistence_error("Failed to create user", other),
            })?;

        user.id = result.last_insert_id() as i64;
        Ok(user)
    }
}
