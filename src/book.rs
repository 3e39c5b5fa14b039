use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{author::Author, genre::Genre};

/// Unique identifier of a book instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct BookId(Uuid);

impl BookId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A book held by a library
///
/// Books are identified by their [`BookId`]: equality and hashing ignore the
/// descriptive fields, so two copies of the same title are different books.
/// `Clone` keeps the identifier (the clone *is* the same book), whereas
/// [`Book::duplicate`] produces a distinct copy.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Book {
    /// Identity of this copy
    id: BookId,
    /// Title, not necessarily unique
    title: String,
    /// Who wrote it
    author: Author,
    /// What kind of book it is
    genre: Genre,
    /// Publication date, free-form
    publication_date: String,
}

impl Book {
    /// Create a new book with a fresh identifier
    #[must_use]
    pub fn new(title: &str, author: Author, genre: Genre, publication_date: &str) -> Self {
        Self {
            id: BookId::new(),
            title: title.to_string(),
            author,
            genre,
            publication_date: publication_date.to_string(),
        }
    }

    /// Produce an independent copy with identical fields and a new identifier
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self { id: BookId::new(), ..self.clone() }
    }

    /// Identifier of this book
    #[must_use]
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Title of the book
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author of the book
    #[must_use]
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Genre of the book
    #[must_use]
    pub fn genre(&self) -> &Genre {
        &self.genre
    }

    /// Publication date of the book
    #[must_use]
    pub fn publication_date(&self) -> &str {
        &self.publication_date
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\nAuthor: {}\nGenre: {}\nPublication Date: {}",
            self.title, self.author, self.genre, self.publication_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a book with fixed author and genre
    fn sample_book() -> Book {
        Book::new(
            "The Mystery Book",
            Author::new("John Doe", "American", "1970-01-01"),
            Genre::new("Mystery", "Books about solving puzzles"),
            "2020-05-01",
        )
    }

    #[test]
    fn test_clone_is_same_book() {
        let book = sample_book();
        let clone = book.clone();
        assert_eq!(book, clone);
        assert_eq!(book.id(), clone.id());
    }

    #[test]
    fn test_duplicate_is_distinct_copy() {
        let book = sample_book();
        let copy = book.duplicate();

        assert_ne!(book, copy);
        assert_eq!(copy.title(), book.title());
        assert_eq!(copy.author(), book.author());
        assert_eq!(copy.genre(), book.genre());
        assert_eq!(copy.publication_date(), book.publication_date());
    }

    #[test]
    fn test_display_includes_nested_records() {
        let text = sample_book().to_string();
        assert!(text.starts_with("Title: The Mystery Book\nAuthor: Name: John Doe\n"));
        assert!(text.contains("Genre: Name: Mystery\nDescription: Books about solving puzzles"));
        assert!(text.ends_with("Publication Date: 2020-05-01"));
    }
}
