//! Process-wide service context
//!
//! Owns the repositories and services for one process; the embedding
//! request layer receives it by injection instead of reaching for
//! globals. Tests build a fresh one each.

use std::path::Path;
use std::sync::Arc;

use bookrack_core::domain::Book;
use bookrack_core::services::{AuthService, CatalogService, ReviewService};
use bookrack_security::jwt::JwtService;
use bookrack_security::session::SessionStore;
use bookrack_shared::config::AppConfig;
use bookrack_shared::error::AppError;

use crate::memory::{MemoryCatalogRepository, MemoryUserRepository};
use crate::seed;

pub struct ServiceContext {
    pub auth: Arc<AuthService<MemoryUserRepository>>,
    pub reviews: ReviewService<MemoryUserRepository, MemoryCatalogRepository>,
    pub catalog: CatalogService<MemoryCatalogRepository>,
    /// Exposed so the request layer can drop a slot when its connection
    /// context ends.
    pub sessions: Arc<SessionStore>,
}

impl ServiceContext {
    pub fn new(config: &AppConfig, books: Vec<Book>) -> Self {
        let users = Arc::new(MemoryUserRepository::new());
        let catalog_repo = Arc::new(MemoryCatalogRepository::from_books(books));
        let sessions = Arc::new(SessionStore::new());

        let jwt = JwtService::new(config.jwt.secret.clone(), config.jwt.access_token_expiry);
        let auth = Arc::new(AuthService::new(users, Some(sessions.clone()), jwt));

        Self {
            auth: auth.clone(),
            reviews: ReviewService::new(auth, catalog_repo.clone()),
            catalog: CatalogService::new(catalog_repo),
            sessions,
        }
    }

    /// Load the seed catalog named by the configuration and wire
    /// everything up.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let books = seed::load_catalog(Path::new(&config.catalog.seed_path))?;
        Ok(Self::new(config, books))
    }
}
