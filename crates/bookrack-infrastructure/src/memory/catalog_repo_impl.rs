// ============================================================================
// Bookrack Infrastructure - In-Memory Catalog Repository
// File: crates/bookrack-infrastructure/src/memory/catalog_repo_impl.rs
// ============================================================================

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bookrack_core::domain::{Book, ReviewMap, ReviewOutcome};
use bookrack_core::error::DomainError;
use bookrack_core::repositories::CatalogRepository;

struct CatalogInner {
    /// ISBNs in load order; the map alone would lose it.
    order: Vec<String>,
    books: HashMap<String, Book>,
}

pub struct MemoryCatalogRepository {
    inner: RwLock<CatalogInner>,
}

impl MemoryCatalogRepository {
    /// Build the catalog from pre-loaded books. The identifier space is
    /// fixed from here on; a repeated ISBN replaces the earlier record and
    /// keeps its position.
    pub fn from_books(books: Vec<Book>) -> Self {
        let mut order = Vec::with_capacity(books.len());
        let mut map = HashMap::with_capacity(books.len());
        for book in books {
            if map.insert(book.isbn.clone(), book.clone()).is_none() {
                order.push(book.isbn);
            }
        }
        Self {
            inner: RwLock::new(CatalogInner { order, books: map }),
        }
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepository {
    async fn all(&self) -> Result<Vec<Book>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|isbn| inner.books.get(isbn))
            .cloned()
            .collect())
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, DomainError> {
        Ok(self.inner.read().await.books.get(isbn).cloned())
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, DomainError> {
        let needle = author.to_lowercase();
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|isbn| inner.books.get(isbn))
            .filter(|b| b.author.to_lowercase() == needle)
            .cloned()
            .collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Book>, DomainError> {
        let needle = title.to_lowercase();
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|isbn| inner.books.get(isbn))
            .filter(|b| b.title.to_lowercase() == needle)
            .cloned()
            .collect())
    }

    async fn reviews(&self, isbn: &str) -> Result<Option<ReviewMap>, DomainError> {
        Ok(self
            .inner
            .read()
            .await
            .books
            .get(isbn)
            .map(|b| b.reviews.clone()))
    }

    async fn upsert_review(
        &self,
        isbn: &str,
        username: &str,
        text: &str,
    ) -> Result<(ReviewOutcome, ReviewMap), DomainError> {
        // One write lock covers classification and write.
        let mut inner = self.inner.write().await;
        let book = inner
            .books
            .get_mut(isbn)
            .ok_or_else(|| DomainError::BookNotFound(isbn.to_string()))?;

        let outcome = if book.has_review_by(username) {
            ReviewOutcome::Updated
        } else {
            ReviewOutcome::Inserted
        };
        book.reviews.insert(username.to_string(), text.to_string());
        Ok((outcome, book.reviews.clone()))
    }

    async fn delete_review(&self, isbn: &str, username: &str) -> Result<ReviewMap, DomainError> {
        let mut inner = self.inner.write().await;
        let book = inner
            .books
            .get_mut(isbn)
            .ok_or_else(|| DomainError::BookNotFound(isbn.to_string()))?;

        if book.reviews.remove(username).is_none() {
            return Err(DomainError::ReviewNotFound);
        }
        Ok(book.reviews.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> MemoryCatalogRepository {
        MemoryCatalogRepository::from_books(vec![
            Book::new(
                "1".to_string(),
                "Things Fall Apart".to_string(),
                "Chinua Achebe".to_string(),
            )
            .unwrap(),
            Book::new(
                "8".to_string(),
                "Pride and Prejudice".to_string(),
                "Jane Austen".to_string(),
            )
            .unwrap(),
            Book::new(
                "2".to_string(),
                "Fairy tales".to_string(),
                "Hans Christian Andersen".to_string(),
            )
            .unwrap(),
        ])
    }

    #[tokio::test]
    async fn test_all_preserves_load_order() {
        let repo = sample_catalog();
        let isbns: Vec<String> = repo.all().await.unwrap().into_iter().map(|b| b.isbn).collect();
        assert_eq!(isbns, vec!["1", "8", "2"]);
    }

    #[tokio::test]
    async fn test_author_match_is_case_insensitive() {
        let repo = sample_catalog();
        let upper = repo.find_by_author("Jane Austen").await.unwrap();
        let lower = repo.find_by_author("jane austen").await.unwrap();
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].isbn, lower[0].isbn);

        // Substrings are not matches.
        assert!(repo.find_by_author("Austen").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_title_match_is_case_insensitive() {
        let repo = sample_catalog();
        let hits = repo.find_by_title("pride AND prejudice").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].isbn, "8");
    }

    #[tokio::test]
    async fn test_reviews_distinguishes_missing_book_from_no_reviews() {
        let repo = sample_catalog();
        assert_eq!(repo.reviews("1").await.unwrap(), Some(ReviewMap::new()));
        assert_eq!(repo.reviews("99").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_classifies_insert_then_update() {
        let repo = sample_catalog();
        let (outcome, reviews) = repo.upsert_review("1", "alice", "good book").await.unwrap();
        assert_eq!(outcome, ReviewOutcome::Inserted);
        assert_eq!(reviews.len(), 1);

        let (outcome, reviews) = repo.upsert_review("1", "alice", "great book").await.unwrap();
        assert_eq!(outcome, ReviewOutcome::Updated);
        assert_eq!(reviews.get("alice").map(String::as_str), Some("great book"));
        assert_eq!(reviews.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_only_own_entry() {
        let repo = sample_catalog();
        repo.upsert_review("1", "alice", "good book").await.unwrap();
        repo.upsert_review("1", "bob", "not for me").await.unwrap();

        let reviews = repo.delete_review("1", "alice").await.unwrap();
        assert!(!reviews.contains_key("alice"));
        assert!(reviews.contains_key("bob"));

        let err = repo.delete_review("1", "alice").await.unwrap_err();
        assert!(matches!(err, DomainError::ReviewNotFound));
    }

    #[tokio::test]
    async fn test_mutations_on_missing_book() {
        let repo = sample_catalog();
        assert!(matches!(
            repo.upsert_review("99", "alice", "x").await.unwrap_err(),
            DomainError::BookNotFound(_)
        ));
        assert!(matches!(
            repo.delete_review("99", "alice").await.unwrap_err(),
            DomainError::BookNotFound(_)
        ));
    }
}
