// crates/session/src/lib.rs
//! Persistent session storage for the authenticated user
//!
//! Keeps the identity of the currently logged-in user across process
//! restarts. The store itself is a thin typed layer over a pluggable
//! [`SessionStorage`] backend: a file on disk in production, an in-memory
//! map in tests.

mod error;
mod storage;
mod store;

pub use error::{SessionError, SessionResult};
pub use storage::{FileStorage, MemoryStorage, SessionRecord, SessionStorage};
pub use store::SessionStore;
