//! User entity representing an account that can log in and own orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account holder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub email: String,
    /// bcrypt hash, never serialized back to clients
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new user with the given password hash
    pub fn new(id: i64, user_name: impl Into<String>, email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_name: user_name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Whether `login` names this user, either by user name or by email
    pub fn matches_login(&self, user_name: Option<&str>, email: Option<&str>) -> bool {
        user_name.is_some_and(|name| name == self.user_name)
            || email.is_some_and(|mail| mail.eq_ignore_ascii_case(&self.email))
    }
}
