// crates/core/src/types/book.rs
//! Book domain model

use serde::{Deserialize, Serialize};

/// A book in the catalog, as seen by the requesting user
///
/// `is_reading` is per-viewing state: it reflects whether the requesting
/// user currently has this book on their reading list, not a property of
/// the book itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_url: Option<String>,
    pub year: i32,
    pub pages: u32,
    pub average_rating: f64,
    pub is_available: bool,
    pub is_reading: bool,
}

impl Book {
    /// Returns a copy of this book with the reading flag replaced
    ///
    /// Books are immutable values; a toggled reading state always produces
    /// a new instance.
    pub fn with_reading(&self, is_reading: bool) -> Self {
        Self {
            is_reading,
            ..self.clone()
        }
    }

    /// Returns true if the book has a cover image to show
    pub fn has_cover(&self) -> bool {
        self.cover_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}
