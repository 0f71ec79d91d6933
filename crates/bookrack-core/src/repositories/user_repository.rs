//! User repository trait (port)

use async_trait::async_trait;

use crate::domain::User;
use crate::error::DomainError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Add a user. Fails with `UsernameTaken` if the name exists; the
    /// uniqueness check and the insert form one critical section, so a
    /// duplicate registration can never partially insert.
    async fn insert(&self, user: &User) -> Result<(), DomainError>;
}
