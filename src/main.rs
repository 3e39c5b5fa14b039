//! Walkthrough of a library's checkout workflow.
//!
//! Set `RUST_LOG=debug` to also see catalog bookkeeping.

use library_catalog::{Author, Book, BookRegistry, Genre, Library, LibraryError, User};

fn main() -> Result<(), LibraryError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut registry = BookRegistry::new();

    let author = Author::new("John Doe", "American", "1970-01-01");
    let genre = Genre::new("Mystery", "Books about solving puzzles and crimes");
    let book = Book::new("The Mystery Book", author.clone(), genre, "2020-05-01");

    let mut city = Library::new("City", "1 Main Street", "555-0100");
    city.add_book(&mut registry, book.clone());
    city.add_book(&mut registry, book.duplicate());
    city.print_books();

    println!("{city}");
    println!(
        "{} book(s) by {} on the shelf, {} registered overall",
        city.get_books_by_author(&author).len(),
        author.name(),
        Library::get_number_of_books(&registry)
    );

    let mut alice = User::new("Alice");
    alice.login();

    city.checkout(&book, &mut alice)?;
    println!("{}", city.loan_state(&book, &alice).map_or_else(String::new, |s| s.to_string()));
    city.checkin(&book, &mut alice)?;

    alice.logout();

    // Bob never logs in, so the library refuses him
    let mut bob = User::new("Bob");
    if let Err(e) = city.checkout(&book, &mut bob) {
        println!("Refused: {e}");
    }

    if city.search_book_by_title("The Missing Book").is_none() {
        println!("No such title in {}", city.name());
    }

    Ok(())
}
