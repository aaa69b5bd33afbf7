//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an active user whose user name equals `user_name` OR whose email
    /// equals `email`, in a single lookup
    async fn find_by_login(
        &self,
        user_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, DomainError>;

    /// Insert a new user, returning it with its store-assigned id
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
