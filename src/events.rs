use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

/// Something that happened to a library's catalog or circulation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CatalogEvent {
    /// A book was added to the collection
    BookAdded {
        /// Title of the book
        title: String,
    },
    /// A book was removed from the collection
    BookRemoved {
        /// Title of the book
        title: String,
    },
    /// A book was checked out to a user
    CheckedOut {
        /// Title of the book
        title: String,
        /// Name of the borrower
        user: String,
    },
    /// A book was checked back in by a user
    CheckedIn {
        /// Title of the book
        title: String,
        /// Name of the borrower
        user: String,
    },
    /// A checkout or check-in was refused because the user is logged out
    LoginRequired {
        /// Name of the refused user
        user: String,
    },
}

impl fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BookAdded { title } => write!(f, "Book '{title}' added to the collection."),
            Self::BookRemoved { title } => {
                write!(f, "Book '{title}' removed from the collection.")
            }
            Self::CheckedOut { title, user } => write!(f, "Book '{title}' checked out to {user}."),
            Self::CheckedIn { title, user } => write!(f, "Book '{title}' checked in by {user}."),
            Self::LoginRequired { .. } => write!(f, "Login required to perform this operation."),
        }
    }
}

/// Wall-clock time of an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct TimeStamp {
    /// Seconds since Unix epoch
    pub seconds: u64,
    /// Nanoseconds part
    pub nanos: u32,
}

impl TimeStamp {
    /// Timestamp of the current system time
    ///
    /// A clock set before the Unix epoch yields the zero timestamp.
    #[must_use]
    pub fn now() -> Self {
        let duration = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
        Self { seconds: duration.as_secs(), nanos: duration.subsec_nanos() }
    }
}

/// An event together with the time it was recorded
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CirculationRecord {
    /// What happened
    pub event: CatalogEvent,
    /// When it happened
    pub timestamp: TimeStamp,
}

impl CirculationRecord {
    /// Record `event` at the current time
    #[must_use]
    pub fn now(event: CatalogEvent) -> Self {
        Self { event, timestamp: TimeStamp::now() }
    }
}
