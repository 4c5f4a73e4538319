// crates/gateway/src/dto.rs
//! Wire DTOs and their domain mappings
//!
//! Field names follow the service's JSON exactly: mostly snake_case, with
//! two camelCase stragglers (`isReading`, `currentlyReading`) the backend
//! never renamed.

use readstack_core::{Book, User};
use serde::{Deserialize, Serialize};

/// Book payload as sent by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub year: i32,
    pub pages: u32,
    pub average_rating: f64,
    pub is_available: bool,
    /// Hint only: whether the requesting user is reading this book.
    /// The server omits it outside per-user views.
    #[serde(rename = "isReading", default)]
    pub is_reading: bool,
}

impl From<BookDto> for Book {
    fn from(dto: BookDto) -> Self {
        Book {
            id: dto.id,
            title: dto.title,
            author: dto.author,
            description: dto.description,
            cover_url: dto.cover_url,
            year: dto.year,
            pages: dto.pages,
            average_rating: dto.average_rating,
            is_available: dto.is_available,
            is_reading: dto.is_reading,
        }
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        BookDto {
            id: book.id,
            title: book.title,
            author: book.author,
            description: book.description,
            cover_url: book.cover_url,
            year: book.year,
            pages: book.pages,
            average_rating: book.average_rating,
            is_available: book.is_available,
            is_reading: book.is_reading,
        }
    }
}

/// User payload as sent by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "currentlyReading", default)]
    pub currently_reading: Option<Vec<i64>>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            id: dto.id,
            username: dto.username,
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            currently_reading: dto.currently_reading.unwrap_or_default(),
        }
    }
}

/// Request body for both register and login
///
/// Login sends only email and password; the optional fields are left out
/// of the JSON entirely rather than sent as null.
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl AuthRequest {
    /// Builds a login request
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            username: None,
            name: None,
            phone: None,
        }
    }

    /// Builds a registration request
    pub fn register(
        email: impl Into<String>,
        password: impl Into<String>,
        username: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            username: Some(username.into()),
            name: Some(name.into()),
            phone: Some(phone.into()),
        }
    }
}

/// Session payload returned by register and login
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: UserDto,
}
