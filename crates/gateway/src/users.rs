// crates/gateway/src/users.rs
//! User and reading-list endpoints

use crate::client::Client;
use crate::dto::{BookDto, UserDto};
use crate::error::GatewayResult;
use async_trait::async_trait;
use std::collections::HashMap;

/// User profile and reading-relation endpoints
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Fetches a user profile; `None` for a success response with no body
    async fn by_id(&self, id: i64) -> GatewayResult<Option<UserDto>>;

    /// Sets or clears the user's reading relation to a book
    ///
    /// One endpoint for both directions, parameterized by `start_reading`.
    async fn toggle_reading(
        &self,
        user_id: i64,
        book_id: i64,
        start_reading: bool,
    ) -> GatewayResult<Option<UserDto>>;

    /// Books the user is currently reading
    async fn reading_list(&self, user_id: i64) -> GatewayResult<Vec<BookDto>>;

    /// Name-to-count map of books the user is reading
    async fn reading_count(&self, user_id: i64) -> GatewayResult<HashMap<String, i64>>;

    /// Generic key/value body holding the per-book reading status
    async fn reading_status(
        &self,
        user_id: i64,
        book_id: i64,
    ) -> GatewayResult<HashMap<String, serde_json::Value>>;

    /// Reading list formatted for profile display (separate endpoint,
    /// same payload shape as [`Self::reading_list`])
    async fn reading_list_for_profile(&self, user_id: i64) -> GatewayResult<Vec<BookDto>>;
}

/// HTTP implementation of [`UsersApi`]
#[derive(Debug, Clone)]
pub struct HttpUsersApi {
    client: Client,
}

impl HttpUsersApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn by_id(&self, id: i64) -> GatewayResult<Option<UserDto>> {
        self.client
            .send(self.client.get(&format!("api/users/{}", id)))
            .await
    }

    async fn toggle_reading(
        &self,
        user_id: i64,
        book_id: i64,
        start_reading: bool,
    ) -> GatewayResult<Option<UserDto>> {
        let request = self
            .client
            .post(&format!("api/users/{}/reading/{}", user_id, book_id))
            .query(&[("startReading", start_reading)]);
        self.client.send(request).await
    }

    async fn reading_list(&self, user_id: i64) -> GatewayResult<Vec<BookDto>> {
        let books = self
            .client
            .send(self.client.get(&format!("api/users/{}/reading", user_id)))
            .await?;
        Ok(books.unwrap_or_default())
    }

    async fn reading_count(&self, user_id: i64) -> GatewayResult<HashMap<String, i64>> {
        let counts = self
            .client
            .send(
                self.client
                    .get(&format!("api/users/{}/reading/count", user_id)),
            )
            .await?;
        Ok(counts.unwrap_or_default())
    }

    async fn reading_status(
        &self,
        user_id: i64,
        book_id: i64,
    ) -> GatewayResult<HashMap<String, serde_json::Value>> {
        let body = self
            .client
            .send(
                self.client
                    .get(&format!("api/users/{}/reading/{}/status", user_id, book_id)),
            )
            .await?;
        Ok(body.unwrap_or_default())
    }

    async fn reading_list_for_profile(&self, user_id: i64) -> GatewayResult<Vec<BookDto>> {
        let books = self
            .client
            .send(
                self.client
                    .get(&format!("api/users/{}/reading-books", user_id)),
            )
            .await?;
        Ok(books.unwrap_or_default())
    }
}
