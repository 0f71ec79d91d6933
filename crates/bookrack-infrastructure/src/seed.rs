//! Catalog seed loading
//!
//! The book collection is an external data source: a JSON object keyed by
//! ISBN, in the order the catalog should present it.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use bookrack_core::domain::{Book, ReviewMap};
use bookrack_shared::error::AppError;

#[derive(Debug, Deserialize)]
struct SeedBook {
    author: String,
    title: String,
    #[serde(default)]
    reviews: ReviewMap,
}

pub fn load_catalog(path: &Path) -> Result<Vec<Book>, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::SeedError(format!("reading {}: {}", path.display(), e)))?;
    let books = parse_catalog(&raw)?;
    info!("Loaded {} books from {}", books.len(), path.display());
    Ok(books)
}

pub fn parse_catalog(raw: &str) -> Result<Vec<Book>, AppError> {
    // serde_json's preserve_order keeps the document order, which becomes
    // the catalog's load order.
    let doc: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| AppError::SeedError(e.to_string()))?;

    let mut books = Vec::with_capacity(doc.len());
    for (isbn, value) in doc {
        let seed: SeedBook = serde_json::from_value(value)
            .map_err(|e| AppError::SeedError(format!("book {}: {}", isbn, e)))?;
        let mut book = Book::new(isbn.clone(), seed.title, seed.author)
            .map_err(|e| AppError::SeedError(format!("book {}: {}", isbn, e)))?;
        book.reviews = seed.reviews;
        books.push(book);
    }
    Ok(books)
}
