use std::{collections::VecDeque, fmt};

use crate::{
    author::Author,
    book::Book,
    circulation::LoanState,
    error::{LibraryError, Result},
    events::{CatalogEvent, CirculationRecord},
    genre::Genre,
    observers::{CatalogObserver, EventLogger},
    registry::BookRegistry,
    user::User,
};

/// Number of history records a new library keeps
pub const DEFAULT_MAX_HISTORY_SIZE: usize = 100;

/// A library: a collection of books and the circulation desk lending them
///
/// Every book added here is also recorded in the [`BookRegistry`] passed to
/// [`Library::add_book`]; [`Library::remove_book`] removes it from both.
/// Checkout moves a book from the collection into the user's set and
/// check-in moves it back. Both require the user to be logged in.
pub struct Library {
    /// Name of the library
    name: String,
    /// Postal address
    address: String,
    /// Contact information, free-form
    contact_info: String,
    /// Books currently on the shelf, in insertion order
    books: Vec<Book>,
    /// Most recent catalog events, oldest first
    history: VecDeque<CirculationRecord>,
    /// Maximum number of history entries to keep
    max_history_size: usize,
    /// Registered event observers
    observers: Vec<Box<dyn CatalogObserver>>,
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("contact_info", &self.contact_info)
            .field("books", &self.books)
            .field("history", &self.history)
            .field("max_history_size", &self.max_history_size)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Library {
    /// Create an empty library with the [`EventLogger`] observer registered
    #[must_use]
    pub fn new(name: &str, address: &str, contact_info: &str) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            contact_info: contact_info.to_string(),
            books: Vec::new(),
            history: VecDeque::new(),
            max_history_size: DEFAULT_MAX_HISTORY_SIZE,
            observers: vec![Box::new(EventLogger)],
        }
    }

    /// Name of the library
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Address of the library
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Contact information of the library
    #[must_use]
    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    /// Books currently in the collection
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books currently in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Whether `book` is currently in the collection
    #[must_use]
    pub fn contains(&self, book: &Book) -> bool {
        self.books.contains(book)
    }

    /// Register an observer to be notified of catalog events
    pub fn register_observer(&mut self, observer: Box<dyn CatalogObserver>) {
        self.observers.push(observer);
    }

    /// Recent catalog events, oldest first
    #[must_use]
    pub fn history(&self) -> &VecDeque<CirculationRecord> {
        &self.history
    }

    /// Change how many history entries are kept, dropping the oldest if needed
    pub fn set_max_history_size(&mut self, max_history_size: usize) {
        self.max_history_size = max_history_size;
        self.trim_history();
    }

    /// Add a book to the collection and to `registry`
    ///
    /// The same book may be added more than once; it is then listed and
    /// counted once per addition.
    pub fn add_book(&mut self, registry: &mut BookRegistry, book: Book) {
        let event = CatalogEvent::BookAdded { title: book.title().to_string() };
        registry.register(book.clone());
        self.books.push(book);
        self.record(event);
    }

    /// Remove the first entry matching `book` from the collection and from
    /// `registry`, returning it
    ///
    /// # Errors
    ///
    /// - `LibraryError::BookNotFound` if the book is not in this library's
    ///   collection
    /// - `LibraryError::NotRegistered` if `registry` does not hold the book,
    ///   i.e. it is not the registry the library was stocked from
    ///
    /// On error neither the collection nor the registry change.
    pub fn remove_book(&mut self, registry: &mut BookRegistry, book: &Book) -> Result<Book> {
        let pos = self.position_of(book)?;
        if !registry.contains(book) {
            return Err(LibraryError::NotRegistered(book.title().to_string()));
        }

        let removed = self.books.remove(pos);
        registry.unregister(&removed);
        self.record(CatalogEvent::BookRemoved { title: removed.title().to_string() });
        Ok(removed)
    }

    /// Get the first book whose title equals `title` exactly
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::BookNotFound` if no book has that title.
    pub fn get_book_by_title(&self, title: &str) -> Result<&Book> {
        self.books
            .iter()
            .find(|book| book.title() == title)
            .ok_or_else(|| LibraryError::BookNotFound(title.to_string()))
    }

    /// All books in the collection written by `author`
    #[must_use]
    pub fn get_books_by_author(&self, author: &Author) -> Vec<&Book> {
        self.books.iter().filter(|book| book.author() == author).collect()
    }

    /// All books in the collection of the given `genre`
    #[must_use]
    pub fn get_books_by_genre(&self, genre: &Genre) -> Vec<&Book> {
        self.books.iter().filter(|book| book.genre() == genre).collect()
    }

    /// Every book registered in `registry`, across all libraries sharing it
    #[must_use]
    pub fn get_all_books(registry: &BookRegistry) -> &[Book] {
        registry.books()
    }

    /// Number of books registered in `registry`, across all libraries sharing it
    #[must_use]
    pub fn get_number_of_books(registry: &BookRegistry) -> usize {
        registry.len()
    }

    /// Log every book in the collection
    pub fn print_books(&self) {
        log::info!("Books in {}:", self.name);
        for book in &self.books {
            log::info!("{book}");
        }
    }

    /// Look up a book by title, logging the outcome instead of failing
    pub fn search_book_by_title(&self, title: &str) -> Option<&Book> {
        match self.get_book_by_title(title) {
            Ok(book) => {
                log::info!("Book found in the library:\n{book}");
                Some(book)
            }
            Err(e) => {
                log::info!("Error: {e}");
                None
            }
        }
    }

    /// Check `book` out of the collection to `user`
    ///
    /// # Errors
    ///
    /// - `LibraryError::LoginRequired` if `user` is not logged in
    /// - `LibraryError::BookNotFound` if the book is not in the collection
    /// - `LibraryError::AlreadyCheckedOut` if `user` already holds the book
    ///
    /// On error neither the collection nor the user change.
    pub fn checkout(&mut self, book: &Book, user: &mut User) -> Result<()> {
        self.login_required(user, |library, user| library.lend(book, user))
    }

    /// Check `book` back in from `user`
    ///
    /// # Errors
    ///
    /// - `LibraryError::LoginRequired` if `user` is not logged in
    /// - `LibraryError::NotCheckedOut` if `user` does not hold the book
    ///
    /// On error neither the collection nor the user change.
    pub fn checkin(&mut self, book: &Book, user: &mut User) -> Result<()> {
        self.login_required(user, |library, user| library.take_back(book, user))
    }

    /// Circulation state of `book` with respect to `user`
    ///
    /// Returns `None` when neither this library nor the user holds the book.
    #[must_use]
    pub fn loan_state(&self, book: &Book, user: &User) -> Option<LoanState> {
        if user.has_checked_out(book) {
            Some(LoanState::CheckedOut(user.name().to_string()))
        } else if self.contains(book) {
            Some(LoanState::Available)
        } else {
            None
        }
    }

    /// Run `op` only if `user` is logged in
    fn login_required<T>(
        &mut self,
        user: &mut User,
        op: impl FnOnce(&mut Self, &mut User) -> Result<T>,
    ) -> Result<T> {
        if !user.is_logged_in() {
            self.record(CatalogEvent::LoginRequired { user: user.name().to_string() });
            return Err(LibraryError::LoginRequired { user: user.name().to_string() });
        }
        op(self, user)
    }

    /// Move `book` from the collection into the user's set
    fn lend(&mut self, book: &Book, user: &mut User) -> Result<()> {
        let pos = self.position_of(book)?;
        if user.has_checked_out(book) {
            return Err(LibraryError::AlreadyCheckedOut { title: book.title().to_string() });
        }

        let lent = self.books.remove(pos);
        let event =
            CatalogEvent::CheckedOut { title: lent.title().to_string(), user: user.name().to_string() };
        user.lend(lent);
        self.record(event);
        Ok(())
    }

    /// Move `book` from the user's set back into the collection
    fn take_back(&mut self, book: &Book, user: &mut User) -> Result<()> {
        let returned = user
            .give_back(book)
            .ok_or_else(|| LibraryError::NotCheckedOut { title: book.title().to_string() })?;

        let event = CatalogEvent::CheckedIn {
            title: returned.title().to_string(),
            user: user.name().to_string(),
        };
        self.books.push(returned);
        self.record(event);
        Ok(())
    }

    /// Index of the first entry matching `book`
    fn position_of(&self, book: &Book) -> Result<usize> {
        self.books
            .iter()
            .position(|b| b == book)
            .ok_or_else(|| LibraryError::BookNotFound(book.title().to_string()))
    }

    /// Notify observers and append `event` to the history
    fn record(&mut self, event: CatalogEvent) {
        for observer in &self.observers {
            observer.on_event(&self.name, &event);
        }
        self.history.push_back(CirculationRecord::now(event));
        self.trim_history();
    }

    /// Drop the oldest history entries beyond the size limit
    fn trim_history(&mut self) {
        while self.history.len() > self.max_history_size {
            self.history.pop_front();
        }
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        log::info!("The library {} has been closed.", self.name);
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}): {} book(s) on the shelf",
            self.name,
            self.address,
            self.contact_info,
            self.books.len()
        )
    }
}
