//! Book domain entity

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Reviews keyed by the reviewing username, one entry per user.
pub type ReviewMap = BTreeMap<String, String>;

/// A catalog entry. The identifier space is fixed at load time and
/// `isbn`, `title`, `author` are immutable afterwards; `reviews` is the
/// only mutable field and only the review path writes to it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Book {
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: String,

    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,

    #[serde(default)]
    pub reviews: ReviewMap,
}

impl Book {
    pub fn new(isbn: String, title: String, author: String) -> Result<Self, validator::ValidationErrors> {
        let book = Self {
            isbn,
            title,
            author,
            reviews: ReviewMap::new(),
        };
        book.validate()?;
        Ok(book)
    }

    pub fn has_review_by(&self, username: &str) -> bool {
        self.reviews.contains_key(username)
    }
}

/// Whether an upsert wrote a first review or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    Inserted,
    Updated,
}

impl ReviewOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ReviewOutcome::Inserted => "Review added.",
            ReviewOutcome::Updated => "Review updated.",
        }
    }
}
