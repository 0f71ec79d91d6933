//! In-memory adapters
//!
//! Process-lifetime storage only; nothing here survives a restart.

pub mod catalog_repo_impl;
pub mod user_repo_impl;

pub use catalog_repo_impl::MemoryCatalogRepository;
pub use user_repo_impl::MemoryUserRepository;
