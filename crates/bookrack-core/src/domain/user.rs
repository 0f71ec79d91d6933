//! User domain entity

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered user. Created once at registration, never mutated and
/// never deleted; there is no deregistration path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(length(min = 1, max = 64, message = "Username must be between 1 and 64 characters"))]
    pub username: String,

    /// Opaque secret, compared by exact match.
    #[validate(length(min = 1, max = 128, message = "Password must be between 1 and 128 characters"))]
    pub password: String,
}

impl User {
    pub fn new(username: String, password: String) -> Result<Self, validator::ValidationErrors> {
        let user = Self { username, password };
        user.validate()?;
        Ok(user)
    }
}
