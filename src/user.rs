use std::collections::HashSet;

use crate::book::Book;

/// A library patron
///
/// The login flag is the whole session model. The set of checked-out books is
/// only mutated by [`crate::Library`], which keeps it consistent with the
/// library's collection.
#[derive(Debug, Clone, Default)]
pub struct User {
    /// Display name
    name: String,
    /// Whether the user is currently logged in
    logged_in: bool,
    /// Books currently on loan to this user
    checked_out_books: HashSet<Book>,
}

impl User {
    /// Create a logged-out user with no books
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), logged_in: false, checked_out_books: HashSet::new() }
    }

    /// Name of the user
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the user is logged in
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Books currently checked out to this user
    #[must_use]
    pub fn checked_out_books(&self) -> &HashSet<Book> {
        &self.checked_out_books
    }

    /// Whether `book` is currently checked out to this user
    #[must_use]
    pub fn has_checked_out(&self, book: &Book) -> bool {
        self.checked_out_books.contains(book)
    }

    /// Log the user in
    pub fn login(&mut self) {
        self.logged_in = true;
        log::info!("{} has logged in.", self.name);
    }

    /// Log the user out; does nothing if not logged in
    pub fn logout(&mut self) {
        if self.logged_in {
            self.logged_in = false;
            log::info!("{} has logged out.", self.name);
        } else {
            log::debug!("{} is not logged in, nothing to log out", self.name);
        }
    }

    /// Take a book on loan
    pub(crate) fn lend(&mut self, book: Book) {
        self.checked_out_books.insert(book);
    }

    /// Give a loaned book back, if held
    pub(crate) fn give_back(&mut self, book: &Book) -> Option<Book> {
        self.checked_out_books.take(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout_toggle_flag() {
        let mut user = User::new("Alice");
        assert!(!user.is_logged_in());

        user.login();
        assert!(user.is_logged_in());

        user.logout();
        assert!(!user.is_logged_in());

        // Logging out twice is harmless
        user.logout();
        assert!(!user.is_logged_in());
    }

    #[test]
    fn test_new_user_has_no_books() {
        let user = User::new("Bob");
        assert_eq!(user.name(), "Bob");
        assert!(user.checked_out_books().is_empty());
    }
}
