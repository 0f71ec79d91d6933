//! # Bookrack Core - Domain Module
//!
//! Domain entities for the catalog service.

pub mod book;
pub mod user;

// Re-export all entities and enums
pub use book::{Book, ReviewMap, ReviewOutcome};
pub use user::User;
