//! Domain services (business logic)

pub mod auth_service;
pub mod catalog_service;
pub mod review_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use review_service::ReviewService;
