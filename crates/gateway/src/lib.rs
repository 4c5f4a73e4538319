// crates/gateway/src/lib.rs
//! Remote catalog gateway: HTTP access to the book service
//!
//! Issues the raw requests for books, users and authentication, and
//! translates wire payloads into domain records. Each API surface is a
//! trait so the mediation layer can be tested against in-memory fakes.

mod auth;
mod books;
mod client;
mod dto;
mod error;
mod users;

pub use auth::{AuthApi, HttpAuthApi};
pub use books::{BooksApi, HttpBooksApi};
pub use client::{Client, ClientConfig};
pub use dto::{AuthRequest, AuthResponse, BookDto, UserDto};
pub use error::{GatewayError, GatewayResult};
pub use users::{HttpUsersApi, UsersApi};
