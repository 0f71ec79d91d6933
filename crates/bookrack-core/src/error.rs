//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Username and password are required")]
    MissingField,

    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User not authenticated")]
    Unauthorized,

    #[error("No book found for ISBN {0}")]
    BookNotFound(String),

    #[error("No existing review from this user to delete")]
    ReviewNotFound,

    #[error("Review text must be non-empty")]
    EmptyReview,

    #[error("Session not initialized")]
    SessionUnavailable,

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
