use thiserror::Error;

/// Result type used by every fallible catalog operation
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Errors raised by library operations
///
/// All variants are recoverable: the library and the user involved are left
/// exactly as they were before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// The book is not held in the library's collection
    #[error("Book not found in the library: {0}")]
    BookNotFound(String),
    /// The book is not in the registry passed to the operation
    #[error("Book not registered in the given registry: {0}")]
    NotRegistered(String),
    /// The book is already checked out to the requesting user
    #[error("The book '{title}' is already checked out to you.")]
    AlreadyCheckedOut {
        /// Title of the book
        title: String,
    },
    /// The book is not checked out to the requesting user
    #[error("The book '{title}' is not checked out to you.")]
    NotCheckedOut {
        /// Title of the book
        title: String,
    },
    /// The user must be logged in to perform the operation
    #[error("Login required to perform this operation ({user} is not logged in).")]
    LoginRequired {
        /// Name of the refused user
        user: String,
    },
}
