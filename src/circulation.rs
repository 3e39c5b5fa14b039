use std::fmt;

use serde::{Deserialize, Serialize};

/// Circulation state of a book with respect to one user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LoanState {
    /// Book is on the library's shelf
    Available,
    /// Book is checked out by the named user
    CheckedOut(String),
}

impl LoanState {
    /// Get a human-readable description of the state
    #[must_use]
    pub fn get_description(&self) -> String {
        match self {
            Self::Available => "Book is available for checkout".to_string(),
            Self::CheckedOut(user) => format!("Book is checked out by {user}"),
        }
    }
}

impl fmt::Display for LoanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_description())
    }
}
