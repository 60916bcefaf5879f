//! Catalog listing command implementation

use super::seed;
use anyhow::Result;

/// Print every book with its average rating
pub fn catalog(path: &str) -> Result<()> {
    let (catalog, _) = seed::load(path)?;

    if catalog.book_count() == 0 {
        println!("No books in {}", path);
        return Ok(());
    }

    for book in catalog.books() {
        match book.average_rating() {
            Ok(avg) => println!("{}  [avg {:.2}, {} ratings]", book, avg, book.ratings().len()),
            Err(_) => println!("{}  [unrated]", book),
        }
    }

    Ok(())
}
