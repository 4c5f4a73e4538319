// crates/catalog/src/usecases.rs
//! Use-case operations
//!
//! One small operation per screen-level intent. Each is a trivial
//! pass-through to the repository; the point is the seam they fix between
//! UI state holders and data access. [`ToggleReading`] is the one with
//! logic of its own.

use crate::repository::CatalogRepository;
use readstack_core::{Book, Outcome, User};
use std::sync::Arc;

/// Loads the full catalog
pub struct GetBooks {
    repository: Arc<dyn CatalogRepository>,
}

impl GetBooks {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Outcome<Vec<Book>> {
        self.repository.get_books().await
    }
}

/// Loads a single book
pub struct GetBook {
    repository: Arc<dyn CatalogRepository>,
}

impl GetBook {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i64) -> Outcome<Book> {
        self.repository.get_book_by_id(id).await
    }
}

/// Loads a user profile
pub struct GetUser {
    repository: Arc<dyn CatalogRepository>,
}

impl GetUser {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i64) -> Outcome<User> {
        self.repository.get_user(id).await
    }
}

/// Authenticates an existing account
pub struct Login {
    repository: Arc<dyn CatalogRepository>,
}

impl Login {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Outcome<User> {
        self.repository.login(email, password).await
    }
}

/// Creates a new account
pub struct Register {
    repository: Arc<dyn CatalogRepository>,
}

impl Register {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        email: &str,
        password: &str,
        username: &str,
        phone: &str,
        name: &str,
    ) -> Outcome<User> {
        self.repository
            .register(email, password, username, phone, name)
            .await
    }
}

/// Flips the reading relation for a (user, book) pair
///
/// Driven by the caller's `is_currently_reading` flag, not re-verified
/// server-side: a stale flag invokes the wrong transition. On success the
/// reported state is the negation of the input, which is client-side truth
/// only.
pub struct ToggleReading {
    repository: Arc<dyn CatalogRepository>,
}

impl ToggleReading {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        user_id: i64,
        book_id: i64,
        is_currently_reading: bool,
    ) -> Outcome<bool> {
        let result = if is_currently_reading {
            self.repository.stop_reading_book(user_id, book_id).await
        } else {
            self.repository.start_reading_book(user_id, book_id).await
        };

        result.map(|_| !is_currently_reading)
    }
}

/// Reads the per-book reading status for a user
pub struct GetReadingStatus {
    repository: Arc<dyn CatalogRepository>,
}

impl GetReadingStatus {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user_id: i64, book_id: i64) -> Outcome<bool> {
        self.repository.get_reading_status(user_id, book_id).await
    }
}

/// Loads the reading list formatted for the profile screen
pub struct GetReadingBooksForProfile {
    repository: Arc<dyn CatalogRepository>,
}

impl GetReadingBooksForProfile {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user_id: i64) -> Outcome<Vec<Book>> {
        self.repository.get_reading_books_for_profile(user_id).await
    }
}
