use crate::book::Book;

/// Registry of every book stocked by the libraries of one session
///
/// Libraries sharing a registry report the same totals through
/// [`crate::Library::get_all_books`] and [`crate::Library::get_number_of_books`].
/// The registry is only changed through [`crate::Library::add_book`] and
/// [`crate::Library::remove_book`], so it always contains every book that is
/// present in one of those libraries' collections.
#[derive(Debug, Clone, Default)]
pub struct BookRegistry {
    /// Registered books in insertion order, duplicates allowed
    books: Vec<Book>,
}

impl BookRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All registered books, in insertion order
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of registered books
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the registry holds no books
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Whether `book` is registered
    #[must_use]
    pub fn contains(&self, book: &Book) -> bool {
        self.books.contains(book)
    }

    /// Append a book
    pub(crate) fn register(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove the first entry matching `book`
    pub(crate) fn unregister(&mut self, book: &Book) -> Option<Book> {
        let pos = self.books.iter().position(|b| b == book)?;
        Some(self.books.remove(pos))
    }
}
