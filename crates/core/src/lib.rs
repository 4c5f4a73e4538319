// crates/core/src/lib.rs
//! Core domain types shared across the Readstack workspace
//!
//! This crate carries the domain models (books, users), the failure
//! taxonomy every catalog operation reports through, and the screen-state
//! sum type UI layers consume. It has no I/O of its own.

mod error;
mod types;

pub use error::{CatalogError, Outcome};
pub use types::{Book, ScreenState, User};
