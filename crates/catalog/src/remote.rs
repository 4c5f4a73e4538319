// crates/catalog/src/remote.rs
//! Remote-backed implementation of the catalog contract

use crate::repository::CatalogRepository;
use async_trait::async_trait;
use readstack_core::{Book, CatalogError, Outcome, User};
use readstack_gateway::{
    AuthApi, AuthRequest, BooksApi, Client, GatewayError, HttpAuthApi, HttpBooksApi, HttpUsersApi,
    UsersApi,
};
use std::sync::{Arc, Mutex, MutexGuard};

/// Substring the backend puts in its 400 body when the book is already on
/// the user's reading list. Matching it turns that rejection into success;
/// see [`RemoteCatalogRepository::start_reading_book`].
pub const ALREADY_READING_MARKER: &str = "already";

/// Key under which the reading-status endpoint reports its boolean
const READING_STATUS_KEY: &str = "isReading";

/// Mediation layer over the gateway APIs
///
/// Holds the only two pieces of shared mutable state in the layer: nothing
/// (the session store lives elsewhere) and the last successfully fetched
/// book list, kept as a stale fallback for [`Self::get_books`].
pub struct RemoteCatalogRepository {
    books: Arc<dyn BooksApi>,
    users: Arc<dyn UsersApi>,
    auth: Arc<dyn AuthApi>,
    cached_books: Mutex<Option<Vec<Book>>>,
}

impl RemoteCatalogRepository {
    /// Creates a repository over explicit API implementations
    pub fn new(books: Arc<dyn BooksApi>, users: Arc<dyn UsersApi>, auth: Arc<dyn AuthApi>) -> Self {
        Self {
            books,
            users,
            auth,
            cached_books: Mutex::new(None),
        }
    }

    /// Creates a repository with HTTP implementations bound to one client
    pub fn with_client(client: Client) -> Self {
        Self::new(
            Arc::new(HttpBooksApi::new(client.clone())),
            Arc::new(HttpUsersApi::new(client.clone())),
            Arc::new(HttpAuthApi::new(client)),
        )
    }

    fn cache(&self) -> MutexGuard<'_, Option<Vec<Book>>> {
        // A poisoned lock means a panic raced a cache write; the list is a
        // plain value, so keep serving it.
        match self.cached_books.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Converts a gateway failure into the catalog taxonomy
fn convert(operation: &str, err: GatewayError) -> CatalogError {
    match err {
        GatewayError::Status { code, .. } => CatalogError::rejected(operation, code),
        other => CatalogError::transport(operation, other.to_string()),
    }
}

/// Fixed stand-in profile returned when a user lookup fails
fn placeholder_user(id: i64) -> User {
    User {
        id,
        username: "testuser".to_string(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        phone: "+7 (999) 123-45-67".to_string(),
        currently_reading: Vec::new(),
    }
}

/// Stand-in returned when the start-reading shim fires
fn already_reading_user(user_id: i64) -> User {
    User {
        id: user_id,
        username: "temp".to_string(),
        name: "Temp".to_string(),
        email: "temp@example.com".to_string(),
        phone: String::new(),
        currently_reading: Vec::new(),
    }
}

#[async_trait]
impl CatalogRepository for RemoteCatalogRepository {
    async fn get_books(&self) -> Outcome<Vec<Book>> {
        match self.books.list().await {
            Ok(dtos) => {
                let books: Vec<Book> = dtos.into_iter().map(Book::from).collect();
                *self.cache() = Some(books.clone());
                Ok(books)
            }
            Err(err) => {
                // Stale fallback: serve the last-known list rather than
                // the failure, as long as one fetch ever succeeded.
                if let Some(cached) = self.cache().clone() {
                    log::warn!("book list fetch failed, serving cached list: {}", err);
                    return Ok(cached);
                }
                Err(convert("load books", err))
            }
        }
    }

    async fn get_book_by_id(&self, id: i64) -> Outcome<Book> {
        match self.books.by_id(id).await {
            Ok(Some(dto)) => Ok(dto.into()),
            Ok(None) => Err(CatalogError::not_found("Book")),
            Err(err) => Err(convert("load book", err)),
        }
    }

    async fn get_available_books(&self) -> Outcome<Vec<Book>> {
        match self.books.available().await {
            Ok(dtos) => Ok(dtos.into_iter().map(Book::from).collect()),
            Err(err) => Err(convert("load available books", err)),
        }
    }

    async fn search_books(&self, query: &str) -> Outcome<Vec<Book>> {
        match self.books.search(query).await {
            Ok(dtos) => Ok(dtos.into_iter().map(Book::from).collect()),
            Err(err) => Err(convert("search books", err)),
        }
    }

    async fn get_user(&self, id: i64) -> Outcome<User> {
        // Best-effort by design: profile screens always get something to
        // render. The placeholder is detectable by its canned fields and
        // must not be treated as a real profile.
        match self.users.by_id(id).await {
            Ok(Some(dto)) => Ok(dto.into()),
            Ok(None) => {
                log::warn!("user {} lookup returned no body, using placeholder", id);
                Ok(placeholder_user(id))
            }
            Err(err) => {
                log::warn!("user {} lookup failed, using placeholder: {}", id, err);
                Ok(placeholder_user(id))
            }
        }
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        username: &str,
        phone: &str,
        name: &str,
    ) -> Outcome<User> {
        let request = AuthRequest::register(email, password, username, name, phone);
        match self.auth.register(&request).await {
            Ok(Some(response)) => Ok(response.user.into()),
            Ok(None) => Err(CatalogError::not_found("User")),
            Err(err) => Err(convert("registration", err)),
        }
    }

    async fn login(&self, email: &str, password: &str) -> Outcome<User> {
        let request = AuthRequest::login(email, password);
        match self.auth.login(&request).await {
            Ok(Some(response)) => Ok(response.user.into()),
            Ok(None) => Err(CatalogError::not_found("User")),
            Err(err) => Err(convert("login", err)),
        }
    }

    async fn start_reading_book(&self, user_id: i64, book_id: i64) -> Outcome<User> {
        log::debug!("start reading: user {} book {}", user_id, book_id);

        match self.users.toggle_reading(user_id, book_id, true).await {
            Ok(Some(dto)) => Ok(dto.into()),
            Ok(None) => Err(CatalogError::not_found("User")),
            Err(GatewayError::Status { code: 400, body })
                if body
                    .as_deref()
                    .is_some_and(|b| b.contains(ALREADY_READING_MARKER)) =>
            {
                // Compatibility shim for a backend quirk: re-adding a book
                // that is already on the list answers 400 instead of
                // succeeding idempotently. Callers see success with a
                // stand-in user.
                log::debug!(
                    "book {} already on reading list for user {}, treating as success",
                    book_id,
                    user_id
                );
                Ok(already_reading_user(user_id))
            }
            Err(err) => Err(convert("start reading", err)),
        }
    }

    async fn stop_reading_book(&self, user_id: i64, book_id: i64) -> Outcome<User> {
        log::debug!("stop reading: user {} book {}", user_id, book_id);

        match self.users.toggle_reading(user_id, book_id, false).await {
            Ok(Some(dto)) => Ok(dto.into()),
            Ok(None) => Err(CatalogError::not_found("User")),
            Err(err) => Err(convert("stop reading", err)),
        }
    }

    async fn get_reading_books(&self, user_id: i64) -> Outcome<Vec<Book>> {
        match self.users.reading_list(user_id).await {
            Ok(dtos) => Ok(dtos.into_iter().map(Book::from).collect()),
            Err(err) => Err(convert("load reading list", err)),
        }
    }

    async fn get_reading_status(&self, user_id: i64, book_id: i64) -> Outcome<bool> {
        match self.users.reading_status(user_id, book_id).await {
            Ok(body) => {
                // Missing key or non-boolean value both read as "not
                // reading", never as a failure.
                let is_reading = body
                    .get(READING_STATUS_KEY)
                    .and_then(serde_json::Value::as_bool)
                    .unwrap_or(false);
                Ok(is_reading)
            }
            Err(err) => Err(convert("load reading status", err)),
        }
    }

    async fn get_reading_count(&self, user_id: i64) -> Outcome<i64> {
        match self.users.reading_count(user_id).await {
            Ok(counts) => Ok(counts.values().sum()),
            Err(err) => Err(convert("load reading count", err)),
        }
    }

    async fn get_reading_books_for_profile(&self, user_id: i64) -> Outcome<Vec<Book>> {
        match self.users.reading_list_for_profile(user_id).await {
            Ok(dtos) => Ok(dtos.into_iter().map(Book::from).collect()),
            Err(err) => Err(convert("load profile reading list", err)),
        }
    }
}
