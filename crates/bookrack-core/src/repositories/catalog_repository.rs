//! Catalog repository trait (port)

use async_trait::async_trait;

use crate::domain::{Book, ReviewMap, ReviewOutcome};
use crate::error::DomainError;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Full catalog snapshot in load order.
    async fn all(&self) -> Result<Vec<Book>, DomainError>;

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, DomainError>;

    /// Case-insensitive exact match on the author field, in load order.
    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, DomainError>;

    /// Case-insensitive exact match on the title field, in load order.
    async fn find_by_title(&self, title: &str) -> Result<Vec<Book>, DomainError>;

    /// `Some(map)` for a known book (empty map when unreviewed), `None`
    /// when the book is absent.
    async fn reviews(&self, isbn: &str) -> Result<Option<ReviewMap>, DomainError>;

    /// Write `text` under `username`, classifying the write as a first
    /// insert or an update of a prior entry. Classification and write
    /// happen in one critical section.
    async fn upsert_review(
        &self,
        isbn: &str,
        username: &str,
        text: &str,
    ) -> Result<(ReviewOutcome, ReviewMap), DomainError>;

    /// Remove `username`'s entry, failing with `ReviewNotFound` when it
    /// never existed.
    async fn delete_review(&self, isbn: &str, username: &str) -> Result<ReviewMap, DomainError>;
}
