//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_login(
        &self,
        user_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.is_active() && u.matches_login(user_name, email))
            .cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.user_name == user.user_name || u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(DomainError::validation("user_name", "User already registered"));
        }

        if user.id == 0 {
            user.id = users.keys().max().copied().unwrap_or(0) + 1;
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
