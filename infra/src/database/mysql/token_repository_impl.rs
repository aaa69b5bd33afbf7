//! MySQL implementation of the TokenRepository trait.
//!
//! Access and refresh tokens live in two tables of identical shape;
//! `TokenKind` picks the table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use order_core::domain::entities::token::{StoredToken, TokenKind};
use order_core::errors::DomainError;
use order_core::repositories::TokenRepository;

use super::{column_error, persistence_error};

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

fn table(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Access => "access_tokens",
        TokenKind::Refresh => "refresh_tokens",
    }
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to StoredToken entity
    fn row_to_token(kind: TokenKind, row: &MySqlRow) -> Result<StoredToken, DomainError> {
        Ok(StoredToken {
            id: row.try_get("id").map_err(|e| column_error("id", e))?,
            kind,
            token: row.try_get("token").map_err(|e| column_error("token", e))?,
            user_id: row.try_get("user_id").map_err(|e| column_error("user_id", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| column_error("expires_at", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
            deleted_at: row
                .try_get::<Option<DateTime<Utc>>, _>("deleted_at")
                .map_err(|e| column_error("deleted_at", e))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save(&self, mut token: StoredToken) -> Result<StoredToken, DomainError> {
        let query = format!(
            "INSERT INTO {} (token, user_id, expires_at, created_at) VALUES (?, ?, ?, ?)",
            table(token.kind)
        );

        let result = sqlx::query(&query)
            .bind(&token.token)
            .bind(token.user_id)
            .bind(token.expires_at)
            .bind(token.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| persistence_error("Failed to save token", e))?;

        token.id = result.last_insert_id() as i64;
        Ok(token)
    }

    async fn find_active(
        &self,
        kind: TokenKind,
        user_id: i64,
        token: &str,
    ) -> Result<Option<StoredToken>, DomainError> {
        let query = format!(
            r#"
            SELECT id, token, user_id, expires_at, created_at, deleted_at
            FROM {}
            WHERE user_id = ? AND token = ? AND deleted_at IS NULL AND expires_at > ?
            LIMIT 1
            "#,
            table(kind)
        );

        let row = sqlx::query(&query)
            .bind(user_id)
            .bind(token)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence_error("Failed to find token", e))?;

        row.map(|row| Self::row_to_token(kind, &row)).transpose()
    }

    async fn revoke_all_for_user(
        &self,
        kind: TokenKind,
        user_id: i64,
    ) -> Result<Vec<StoredToken>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| persistence_error("Failed to begin revocation", e))?;

        let select = format!(
            r#"
            SELECT id, token, user_id, expires_at, created_at, deleted_at
            FROM {}
            WHERE user_id = ? AND deleted_at IS NULL
            FOR UPDATE
            "#,
            table(kind)
        );
        let rows = sqlx::query(&select)
            .bind(user_id)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| persistence_error("Failed to load tokens for revocation", e))?;
        let revoked = rows
            .iter()
            .map(|row| Self::row_to_token(kind, row))
            .collect::<Result<Vec<_>, _>>()?;

        let update = format!(
            "UPDATE {} SET deleted_at = ? WHERE user_id = ? AND deleted_at IS NULL",
            table(kind)
        );
        sqlx::query(&update)
            .bind(Utc::now())
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| persistence_error("Failed to revoke tokens", e))?;

        tx.commit()
            .await
            .map_err(|e| persistence_error("Failed to commit revocation", e))?;

        Ok(revoked)
    }
}
