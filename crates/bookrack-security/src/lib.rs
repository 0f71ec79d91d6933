//! # Bookrack Security
//!
//! Security utilities: JWT issuance/validation and connection-bound sessions.

pub mod jwt;
pub mod session;

pub use jwt::JwtService;
pub use session::{Session, SessionStore};
