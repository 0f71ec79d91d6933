//! Repository traits (ports)

pub mod catalog_repository;
pub mod user_repository;

pub use catalog_repository::CatalogRepository;
pub use user_repository::UserRepository;
