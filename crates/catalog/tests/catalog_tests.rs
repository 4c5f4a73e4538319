//! Mediation-layer behavior tests against scripted in-memory gateways

use readstack_catalog::{
    CatalogRepository, GetBooks, RemoteCatalogRepository, ToggleReading, ALREADY_READING_MARKER,
};
use readstack_core::CatalogError;
use readstack_gateway::{
    AuthApi, AuthRequest, AuthResponse, BookDto, BooksApi, GatewayError, GatewayResult, UserDto,
    UsersApi,
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

fn book_dto(id: i64) -> BookDto {
    BookDto {
        id,
        title: format!("Book {}", id),
        author: "Author".to_string(),
        description: "Description".to_string(),
        cover_url: None,
        year: 2001,
        pages: 200,
        average_rating: 4.0,
        is_available: true,
        is_reading: false,
    }
}

fn user_dto(id: i64) -> UserDto {
    UserDto {
        id,
        username: "anna".to_string(),
        name: "Anna".to_string(),
        email: "anna@example.com".to_string(),
        phone: "+7 900".to_string(),
        currently_reading: Some(vec![1]),
    }
}

fn status_error(code: u16, body: Option<&str>) -> GatewayError {
    GatewayError::Status {
        code,
        body: body.map(str::to_string),
    }
}

fn pop<T>(queue: &Mutex<VecDeque<T>>) -> T {
    queue
        .lock()
        .expect("queue lock")
        .pop_front()
        .expect("a scripted response for this call")
}

fn push<T>(queue: &Mutex<VecDeque<T>>, value: T) {
    queue.lock().expect("queue lock").push_back(value);
}

#[derive(Default)]
struct FakeBooksApi {
    list: Mutex<VecDeque<GatewayResult<Vec<BookDto>>>>,
    by_id: Mutex<VecDeque<GatewayResult<Option<BookDto>>>>,
    available: Mutex<VecDeque<GatewayResult<Vec<BookDto>>>>,
    search: Mutex<VecDeque<GatewayResult<Vec<BookDto>>>>,
}

#[async_trait::async_trait]
impl BooksApi for FakeBooksApi {
    async fn list(&self) -> GatewayResult<Vec<BookDto>> {
        pop(&self.list)
    }

    async fn by_id(&self, _id: i64) -> GatewayResult<Option<BookDto>> {
        pop(&self.by_id)
    }

    async fn available(&self) -> GatewayResult<Vec<BookDto>> {
        pop(&self.available)
    }

    async fn search(&self, _query: &str) -> GatewayResult<Vec<BookDto>> {
        pop(&self.search)
    }
}

#[derive(Default)]
struct FakeUsersApi {
    by_id: Mutex<VecDeque<GatewayResult<Option<UserDto>>>>,
    toggle: Mutex<VecDeque<GatewayResult<Option<UserDto>>>>,
    toggle_calls: Mutex<Vec<(i64, i64, bool)>>,
    reading_list: Mutex<VecDeque<GatewayResult<Vec<BookDto>>>>,
    reading_count: Mutex<VecDeque<GatewayResult<HashMap<String, i64>>>>,
    reading_status: Mutex<VecDeque<GatewayResult<HashMap<String, serde_json::Value>>>>,
    profile_list: Mutex<VecDeque<GatewayResult<Vec<BookDto>>>>,
}

#[async_trait::async_trait]
impl UsersApi for FakeUsersApi {
    async fn by_id(&self, _id: i64) -> GatewayResult<Option<UserDto>> {
        pop(&self.by_id)
    }

    async fn toggle_reading(
        &self,
        user_id: i64,
        book_id: i64,
        start_reading: bool,
    ) -> GatewayResult<Option<UserDto>> {
        self.toggle_calls
            .lock()
            .expect("calls lock")
            .push((user_id, book_id, start_reading));
        pop(&self.toggle)
    }

    async fn reading_list(&self, _user_id: i64) -> GatewayResult<Vec<BookDto>> {
        pop(&self.reading_list)
    }

    async fn reading_count(&self, _user_id: i64) -> GatewayResult<HashMap<String, i64>> {
        pop(&self.reading_count)
    }

    async fn reading_status(
        &self,
        _user_id: i64,
        _book_id: i64,
    ) -> GatewayResult<HashMap<String, serde_json::Value>> {
        pop(&self.reading_status)
    }

    async fn reading_list_for_profile(&self, _user_id: i64) -> GatewayResult<Vec<BookDto>> {
        pop(&self.profile_list)
    }
}

#[derive(Default)]
struct FakeAuthApi {
    register: Mutex<VecDeque<GatewayResult<Option<AuthResponse>>>>,
    login: Mutex<VecDeque<GatewayResult<Option<AuthResponse>>>>,
    requests: Mutex<Vec<AuthRequest>>,
}

#[async_trait::async_trait]
impl AuthApi for FakeAuthApi {
    async fn register(&self, request: &AuthRequest) -> GatewayResult<Option<AuthResponse>> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        pop(&self.register)
    }

    async fn login(&self, request: &AuthRequest) -> GatewayResult<Option<AuthResponse>> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        pop(&self.login)
    }
}

struct Harness {
    books: Arc<FakeBooksApi>,
    users: Arc<FakeUsersApi>,
    auth: Arc<FakeAuthApi>,
    repository: Arc<RemoteCatalogRepository>,
}

fn harness() -> Harness {
    let books = Arc::new(FakeBooksApi::default());
    let users = Arc::new(FakeUsersApi::default());
    let auth = Arc::new(FakeAuthApi::default());
    let repository = Arc::new(RemoteCatalogRepository::new(
        books.clone(),
        users.clone(),
        auth.clone(),
    ));
    Harness {
        books,
        users,
        auth,
        repository,
    }
}

// ---- get_books and the fallback cache ----

#[tokio::test]
async fn get_books_maps_payload() {
    let h = harness();
    push(&h.books.list, Ok(vec![book_dto(1), book_dto(2)]));

    let books = h.repository.get_books().await.expect("books");
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, 1);
    assert_eq!(books[1].title, "Book 2");
}

#[tokio::test]
async fn get_books_failure_without_prior_success_fails() {
    let h = harness();
    push(&h.books.list, Err(status_error(503, None)));

    let err = h.repository.get_books().await.expect_err("failure");
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn get_books_failure_after_success_serves_cached_list() {
    let h = harness();
    push(&h.books.list, Ok(vec![book_dto(1)]));
    push(&h.books.list, Err(status_error(500, None)));

    let first = h.repository.get_books().await.expect("first fetch");
    let second = h.repository.get_books().await.expect("fallback");
    assert_eq!(second, first);
}

#[tokio::test]
async fn get_books_success_replaces_cache() {
    let h = harness();
    push(&h.books.list, Ok(vec![book_dto(1)]));
    push(&h.books.list, Ok(vec![book_dto(2), book_dto(3)]));
    push(&h.books.list, Err(GatewayError::Decode("eof".to_string())));

    h.repository.get_books().await.expect("first");
    let refreshed = h.repository.get_books().await.expect("second");
    let fallback = h.repository.get_books().await.expect("fallback");
    assert_eq!(fallback, refreshed);
    assert_eq!(fallback.len(), 2);
}

// ---- single-book lookup ----

#[tokio::test]
async fn get_book_by_id_maps_payload() {
    let h = harness();
    push(&h.books.by_id, Ok(Some(book_dto(7))));

    let book = h.repository.get_book_by_id(7).await.expect("book");
    assert_eq!(book.id, 7);
}

#[tokio::test]
async fn get_book_by_id_empty_body_is_not_found() {
    let h = harness();
    push(&h.books.by_id, Ok(None));

    let err = h.repository.get_book_by_id(7).await.expect_err("missing");
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

#[tokio::test]
async fn get_book_by_id_rejection_keeps_code() {
    let h = harness();
    push(&h.books.by_id, Err(status_error(404, None)));

    let err = h.repository.get_book_by_id(7).await.expect_err("rejected");
    assert_eq!(err.status_code(), Some(404));
}

// ---- user lookup never fails ----

#[tokio::test]
async fn get_user_maps_payload() {
    let h = harness();
    push(&h.users.by_id, Ok(Some(user_dto(3))));

    let user = h.repository.get_user(3).await.expect("user");
    assert_eq!(user.name, "Anna");
    assert_eq!(user.currently_reading, vec![1]);
}

#[tokio::test]
async fn get_user_failure_yields_placeholder() {
    let h = harness();
    push(&h.users.by_id, Err(GatewayError::Decode("eof".to_string())));

    let user = h.repository.get_user(99).await.expect("placeholder");
    assert_eq!(user.id, 99);
    assert_eq!(user.username, "testuser");
    assert_eq!(user.email, "test@example.com");
}

#[tokio::test]
async fn get_user_empty_body_yields_placeholder() {
    let h = harness();
    push(&h.users.by_id, Ok(None));

    let user = h.repository.get_user(5).await.expect("placeholder");
    assert_eq!(user.id, 5);
    assert_eq!(user.name, "Test User");
}

// ---- authentication ----

#[tokio::test]
async fn login_maps_session_user() {
    let h = harness();
    push(
        &h.auth.login,
        Ok(Some(AuthResponse { user: user_dto(3) })),
    );

    let user = h
        .repository
        .login("anna@example.com", "secret")
        .await
        .expect("user");
    assert_eq!(user.id, 3);

    let requests = h.auth.requests.lock().expect("requests");
    assert_eq!(requests[0].email, "anna@example.com");
    assert_eq!(requests[0].username, None);
}

#[tokio::test]
async fn login_rejection_keeps_code() {
    let h = harness();
    push(&h.auth.login, Err(status_error(401, Some("bad password"))));

    let err = h
        .repository
        .login("anna@example.com", "wrong")
        .await
        .expect_err("rejected");
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn register_sends_profile_fields() {
    let h = harness();
    push(
        &h.auth.register,
        Ok(Some(AuthResponse { user: user_dto(8) })),
    );

    let user = h
        .repository
        .register("a@b.com", "secret", "anna", "+7 900", "Anna")
        .await
        .expect("user");
    assert_eq!(user.id, 8);

    let requests = h.auth.requests.lock().expect("requests");
    assert_eq!(requests[0].username.as_deref(), Some("anna"));
    assert_eq!(requests[0].phone.as_deref(), Some("+7 900"));
    assert_eq!(requests[0].name.as_deref(), Some("Anna"));
}

#[tokio::test]
async fn register_empty_body_fails() {
    let h = harness();
    push(&h.auth.register, Ok(None));

    let err = h
        .repository
        .register("a@b.com", "secret", "anna", "", "Anna")
        .await
        .expect_err("failure");
    assert!(matches!(err, CatalogError::NotFound { .. }));
}

// ---- reading toggle ----

#[tokio::test]
async fn toggle_not_reading_starts_and_reports_true() {
    let h = harness();
    push(&h.users.toggle, Ok(Some(user_dto(3))));
    let toggle = ToggleReading::new(h.repository.clone());

    let now_reading = toggle.execute(3, 10, false).await.expect("toggle");
    assert!(now_reading);

    let calls = h.users.toggle_calls.lock().expect("calls");
    assert_eq!(calls.as_slice(), &[(3, 10, true)]);
}

#[tokio::test]
async fn toggle_reading_stops_and_reports_false() {
    let h = harness();
    push(&h.users.toggle, Ok(Some(user_dto(3))));
    let toggle = ToggleReading::new(h.repository.clone());

    let now_reading = toggle.execute(3, 10, true).await.expect("toggle");
    assert!(!now_reading);

    let calls = h.users.toggle_calls.lock().expect("calls");
    assert_eq!(calls.as_slice(), &[(3, 10, false)]);
}

#[tokio::test]
async fn toggle_failure_propagates() {
    let h = harness();
    push(&h.users.toggle, Err(status_error(500, None)));
    let toggle = ToggleReading::new(h.repository.clone());

    let err = toggle.execute(3, 10, true).await.expect_err("failure");
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn start_reading_already_marker_is_success() {
    let _ = env_logger::builder().is_test(true).try_init();

    let h = harness();
    push(
        &h.users.toggle,
        Err(status_error(400, Some("book is already in reading list"))),
    );

    let user = h
        .repository
        .start_reading_book(3, 10)
        .await
        .expect("shim success");
    assert_eq!(user.id, 3);
    assert_eq!(user.username, "temp");
}

#[tokio::test]
async fn start_reading_400_without_marker_fails() {
    let h = harness();
    push(&h.users.toggle, Err(status_error(400, Some("bad request"))));

    let err = h
        .repository
        .start_reading_book(3, 10)
        .await
        .expect_err("failure");
    assert_eq!(err.status_code(), Some(400));
}

#[tokio::test]
async fn stop_reading_never_uses_the_shim() {
    let h = harness();
    let body = format!("{} on the list", ALREADY_READING_MARKER);
    push(&h.users.toggle, Err(status_error(400, Some(body.as_str()))));

    let err = h
        .repository
        .stop_reading_book(3, 10)
        .await
        .expect_err("failure");
    assert_eq!(err.status_code(), Some(400));
}

// ---- reading status and count ----

#[tokio::test]
async fn reading_status_reads_the_flag() {
    let h = harness();
    let mut body = HashMap::new();
    body.insert("isReading".to_string(), serde_json::Value::Bool(true));
    push(&h.users.reading_status, Ok(body));

    assert!(h.repository.get_reading_status(3, 10).await.expect("status"));
}

#[tokio::test]
async fn reading_status_missing_key_is_false() {
    let h = harness();
    push(&h.users.reading_status, Ok(HashMap::new()));

    assert!(!h.repository.get_reading_status(3, 10).await.expect("status"));
}

#[tokio::test]
async fn reading_status_wrong_type_is_false() {
    let h = harness();
    let mut body = HashMap::new();
    body.insert(
        "isReading".to_string(),
        serde_json::Value::String("yes".to_string()),
    );
    push(&h.users.reading_status, Ok(body));

    assert!(!h.repository.get_reading_status(3, 10).await.expect("status"));
}

#[tokio::test]
async fn reading_count_sums_values() {
    let h = harness();
    let mut counts = HashMap::new();
    counts.insert("count".to_string(), 3i64);
    push(&h.users.reading_count, Ok(counts));
    push(&h.users.reading_count, Ok(HashMap::new()));

    assert_eq!(h.repository.get_reading_count(3).await.expect("count"), 3);
    assert_eq!(h.repository.get_reading_count(3).await.expect("count"), 0);
}

// ---- reading lists, search, availability ----

#[tokio::test]
async fn reading_lists_map_payloads() {
    let h = harness();
    push(&h.users.reading_list, Ok(vec![book_dto(1)]));
    push(&h.users.profile_list, Ok(vec![book_dto(2), book_dto(3)]));

    let reading = h.repository.get_reading_books(3).await.expect("list");
    assert_eq!(reading.len(), 1);

    let profile = h
        .repository
        .get_reading_books_for_profile(3)
        .await
        .expect("profile list");
    assert_eq!(profile.len(), 2);
}

#[tokio::test]
async fn search_and_available_follow_plain_failure_policy() {
    let h = harness();
    push(&h.books.search, Ok(vec![book_dto(4)]));
    push(&h.books.available, Err(status_error(502, None)));

    let found = h.repository.search_books("war").await.expect("results");
    assert_eq!(found[0].id, 4);

    let err = h
        .repository
        .get_available_books()
        .await
        .expect_err("failure");
    assert_eq!(err.status_code(), Some(502));
}

// ---- use-case pass-through ----

#[tokio::test]
async fn get_books_use_case_delegates() {
    let h = harness();
    push(&h.books.list, Ok(vec![book_dto(1)]));

    let use_case = GetBooks::new(h.repository.clone());
    let books = use_case.execute().await.expect("books");
    assert_eq!(books.len(), 1);
}
