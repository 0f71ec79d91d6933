// ============================================================================
// Bookrack Core - Review Service
// File: crates/bookrack-core/src/services/review_service.rs
// ============================================================================
//! Authorization-gated review mutation: upsert and delete of the caller's
//! own review on a catalog book.

use std::sync::Arc;

use tracing::{info, warn};

use bookrack_shared::types::ConnectionId;
use bookrack_shared::utils::is_blank;

use crate::domain::{ReviewMap, ReviewOutcome};
use crate::error::DomainError;
use crate::repositories::{CatalogRepository, UserRepository};
use crate::services::AuthService;

pub struct ReviewService<R: UserRepository, C: CatalogRepository> {
    auth: Arc<AuthService<R>>,
    catalog: Arc<C>,
}

impl<R: UserRepository, C: CatalogRepository> ReviewService<R, C> {
    pub fn new(auth: Arc<AuthService<R>>, catalog: Arc<C>) -> Self {
        Self { auth, catalog }
    }

    /// Write the caller's review on a book, reporting whether it was a
    /// first insert or an update. Repeating the call with the same text
    /// leaves the catalog in the same state.
    pub async fn upsert_review(
        &self,
        ctx: &ConnectionId,
        isbn: &str,
        text: &str,
    ) -> Result<(ReviewOutcome, ReviewMap), DomainError> {
        let username = self.resolve_identity(ctx)?;

        if self.catalog.find_by_isbn(isbn).await?.is_none() {
            return Err(DomainError::BookNotFound(isbn.to_string()));
        }

        if is_blank(text) {
            return Err(DomainError::EmptyReview);
        }

        let (outcome, reviews) = self.catalog.upsert_review(isbn, &username, text).await?;

        info!(
            "{} review by {} on ISBN {}",
            match outcome {
                ReviewOutcome::Inserted => "Added",
                ReviewOutcome::Updated => "Updated",
            },
            username,
            isbn
        );
        Ok((outcome, reviews))
    }

    /// Remove the caller's own review. There is no moderation override;
    /// another user's entry is unreachable from here.
    pub async fn delete_review(
        &self,
        ctx: &ConnectionId,
        isbn: &str,
    ) -> Result<ReviewMap, DomainError> {
        let username = self.resolve_identity(ctx)?;

        let reviews = self.catalog.delete_review(isbn, &username).await?;

        info!("Deleted review by {} on ISBN {}", username, isbn);
        Ok(reviews)
    }

    fn resolve_identity(&self, ctx: &ConnectionId) -> Result<String, DomainError> {
        self.auth.current_identity(ctx).ok_or_else(|| {
            warn!("Review mutation rejected: no authenticated session");
            DomainError::Unauthorized
        })
    }
}
