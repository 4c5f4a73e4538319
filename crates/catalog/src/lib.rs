// crates/catalog/src/lib.rs
//! Mediation layer between UI state holders and the remote catalog
//!
//! Exposes one capability-oriented contract ([`CatalogRepository`]) that
//! hides the gateway's transport details and returns uniform
//! [`Outcome`](readstack_core::Outcome) values, plus one small operation
//! struct per use case to fix the seam UI code calls through.

mod remote;
mod repository;
mod usecases;

pub use remote::{RemoteCatalogRepository, ALREADY_READING_MARKER};
pub use repository::CatalogRepository;
pub use usecases::{
    GetBook, GetBooks, GetReadingBooksForProfile, GetReadingStatus, GetUser, Login, Register,
    ToggleReading,
};
