// crates/core/src/types/mod.rs
//! Domain model types

mod book;
mod state;
mod user;

pub use book::Book;
pub use state::ScreenState;
pub use user::User;
