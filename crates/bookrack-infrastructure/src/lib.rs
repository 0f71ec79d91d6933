//! # Bookrack Infrastructure
//!
//! In-memory repository implementations (adapters), catalog seeding, and
//! the process-wide service context.

pub mod context;
pub mod memory;
pub mod seed;

pub use context::ServiceContext;
pub use memory::{MemoryCatalogRepository, MemoryUserRepository};
