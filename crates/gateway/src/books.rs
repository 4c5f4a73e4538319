// crates/gateway/src/books.rs
//! Book endpoints

use crate::client::Client;
use crate::dto::BookDto;
use crate::error::GatewayResult;
use async_trait::async_trait;

/// Book catalog endpoints
#[async_trait]
pub trait BooksApi: Send + Sync {
    /// Lists all books
    async fn list(&self) -> GatewayResult<Vec<BookDto>>;

    /// Fetches a single book; `None` for a success response with no body
    async fn by_id(&self, id: i64) -> GatewayResult<Option<BookDto>>;

    /// Lists only books currently available for borrowing
    async fn available(&self) -> GatewayResult<Vec<BookDto>>;

    /// Free-text search over the catalog
    async fn search(&self, query: &str) -> GatewayResult<Vec<BookDto>>;
}

/// HTTP implementation of [`BooksApi`]
#[derive(Debug, Clone)]
pub struct HttpBooksApi {
    client: Client,
}

impl HttpBooksApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BooksApi for HttpBooksApi {
    async fn list(&self) -> GatewayResult<Vec<BookDto>> {
        let books = self.client.send(self.client.get("api/books")).await?;
        Ok(books.unwrap_or_default())
    }

    async fn by_id(&self, id: i64) -> GatewayResult<Option<BookDto>> {
        self.client
            .send(self.client.get(&format!("api/books/{}", id)))
            .await
    }

    async fn available(&self) -> GatewayResult<Vec<BookDto>> {
        let books = self
            .client
            .send(self.client.get("api/books/available"))
            .await?;
        Ok(books.unwrap_or_default())
    }

    async fn search(&self, query: &str) -> GatewayResult<Vec<BookDto>> {
        let request = self.client.get("api/books/search").query(&[("query", query)]);
        let books = self.client.send(request).await?;
        Ok(books.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_books_api_creation() {
        let client = Client::new("http://localhost:8089").expect("client");
        let _: HttpBooksApi = HttpBooksApi::new(client);
    }

    #[tokio::test]
    #[ignore = "Requires a running catalog service"]
    async fn test_live_list_books() {
        let _ = env_logger::builder().is_test(true).try_init();

        let client = Client::new("http://localhost:8089").expect("client");
        let api = HttpBooksApi::new(client);

        match api.list().await {
            Ok(books) => println!("catalog has {} books", books.len()),
            Err(e) => eprintln!("list failed: {}", e),
        }
    }
}
