// crates/catalog/src/repository.rs
//! The mediation-layer contract

use async_trait::async_trait;
use readstack_core::{Book, Outcome, User};

/// Capability-oriented contract over the remote catalog
///
/// Every operation returns an [`Outcome`]; transport failures never escape
/// as panics or raw errors. Two operations deliberately bend the failure
/// policy and are documented on the implementation: [`Self::get_user`]
/// never fails, and [`Self::start_reading_book`] converts one specific
/// rejection into success.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All books in the catalog
    ///
    /// Falls back to the last successfully fetched list when the gateway
    /// fails; the fallback is stale and has no expiry.
    async fn get_books(&self) -> Outcome<Vec<Book>>;

    /// A single book by id
    async fn get_book_by_id(&self, id: i64) -> Outcome<Book>;

    /// Only books currently available for borrowing
    async fn get_available_books(&self) -> Outcome<Vec<Book>>;

    /// Free-text search over the catalog
    async fn search_books(&self, query: &str) -> Outcome<Vec<Book>>;

    /// A user profile by id; substitutes a placeholder on failure
    async fn get_user(&self, id: i64) -> Outcome<User>;

    /// Creates an account and returns the new user
    async fn register(
        &self,
        email: &str,
        password: &str,
        username: &str,
        phone: &str,
        name: &str,
    ) -> Outcome<User>;

    /// Authenticates and returns the existing user
    async fn login(&self, email: &str, password: &str) -> Outcome<User>;

    /// Marks the (user, book) reading relation active
    async fn start_reading_book(&self, user_id: i64, book_id: i64) -> Outcome<User>;

    /// Marks the (user, book) reading relation inactive
    async fn stop_reading_book(&self, user_id: i64, book_id: i64) -> Outcome<User>;

    /// Books the user is currently reading
    async fn get_reading_books(&self, user_id: i64) -> Outcome<Vec<Book>>;

    /// Whether the user is reading the given book; absent or malformed
    /// status bodies read as `false`
    async fn get_reading_status(&self, user_id: i64, book_id: i64) -> Outcome<bool>;

    /// Number of books the user is reading; 0 when the server sends none
    async fn get_reading_count(&self, user_id: i64) -> Outcome<i64>;

    /// Reading list formatted for profile display (separate endpoint from
    /// [`Self::get_reading_books`], same shape)
    async fn get_reading_books_for_profile(&self, user_id: i64) -> Outcome<Vec<Book>>;
}
