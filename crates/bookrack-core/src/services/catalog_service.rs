//! Read-only query facade over the catalog. No authorization required.

use std::sync::Arc;

use crate::domain::{Book, ReviewMap};
use crate::error::DomainError;
use crate::repositories::CatalogRepository;

pub struct CatalogService<C: CatalogRepository> {
    catalog: Arc<C>,
}

impl<C: CatalogRepository> CatalogService<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Full catalog snapshot in load order.
    pub async fn get_all(&self) -> Result<Vec<Book>, DomainError> {
        self.catalog.all().await
    }

    pub async fn get_by_isbn(&self, isbn: &str) -> Result<Option<Book>, DomainError> {
        self.catalog.find_by_isbn(isbn).await
    }

    /// Books whose author matches case-insensitively; possibly empty.
    pub async fn get_by_author(&self, author: &str) -> Result<Vec<Book>, DomainError> {
        self.catalog.find_by_author(author).await
    }

    /// Books whose title matches case-insensitively; possibly empty.
    pub async fn get_by_title(&self, title: &str) -> Result<Vec<Book>, DomainError> {
        self.catalog.find_by_title(title).await
    }

    /// A book's review map; `Some` and empty when the book exists but has
    /// no reviews yet, `None` when the book is absent.
    pub async fn get_reviews(&self, isbn: &str) -> Result<Option<ReviewMap>, DomainError> {
        self.catalog.reviews(isbn).await
    }
}
