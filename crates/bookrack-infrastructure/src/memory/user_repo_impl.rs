// ============================================================================
// Bookrack Infrastructure - In-Memory User Repository
// File: crates/bookrack-infrastructure/src/memory/user_repo_impl.rs
// ============================================================================

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookrack_core::domain::User;
use bookrack_core::error::DomainError;
use bookrack_core::repositories::UserRepository;

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), DomainError> {
        // Single write lock covers the uniqueness check and the insert.
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(DomainError::UsernameTaken(user.username.clone()));
        }
        users.insert(user.username.clone(), user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_find() {
        let repo = MemoryUserRepository::new();
        let user = User::new("alice".to_string(), "pw1".to_string()).unwrap();
        repo.insert(&user).await.unwrap();

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.password, "pw1");
        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_insert_leaves_original() {
        let repo = MemoryUserRepository::new();
        let user = User::new("alice".to_string(), "pw1".to_string()).unwrap();
        repo.insert(&user).await.unwrap();

        let dup = User::new("alice".to_string(), "pw2".to_string()).unwrap();
        let err = repo.insert(&dup).await.unwrap_err();
        assert!(matches!(err, DomainError::UsernameTaken(name) if name == "alice"));

        // The first registration is untouched.
        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.password, "pw1");
    }
}
