//! Library catalog: books, authors, genres and the libraries lending them.
//!
//! Books are stocked in a [`Library`] and recorded in a [`BookRegistry`]
//! shared by all libraries of a session. Logged-in [`User`]s check books out
//! of and back into a library; every change is reported as a
//! [`CatalogEvent`] to the library's observers and kept in its history.

pub mod author;
pub mod book;
pub mod circulation;
pub mod error;
pub mod events;
pub mod genre;
pub mod library;
pub mod observers;
pub mod registry;
pub mod user;

pub use author::Author;
pub use book::{Book, BookId};
pub use circulation::LoanState;
pub use error::{LibraryError, Result};
pub use events::{CatalogEvent, CirculationRecord, TimeStamp};
pub use genre::Genre;
pub use library::Library;
pub use observers::{CatalogObserver, EventLogger};
pub use registry::BookRegistry;
pub use user::User;
