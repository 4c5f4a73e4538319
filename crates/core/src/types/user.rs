// crates/core/src/types/user.rs
//! User domain model

use serde::{Deserialize, Serialize};

/// An authenticated user of the catalog
///
/// `currently_reading` mirrors the server's view of the user's reading
/// list; it is empty when the server omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub currently_reading: Vec<i64>,
}

impl User {
    /// Returns true if the user's reading list contains the given book
    pub fn is_reading(&self, book_id: i64) -> bool {
        self.currently_reading.contains(&book_id)
    }
}
