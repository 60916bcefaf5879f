//! Ranking report command implementation

use super::seed;
use anyhow::Result;
use tome_core::Standing;

/// Print every ranking query over a seeded catalog
pub fn stats(path: &str, top: usize, json: bool) -> Result<()> {
    let (catalog, _) = seed::load(path)?;
    let summary = catalog.summary(top);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Books:         {}", summary.books);
    println!("Readers:       {}", summary.readers);

    if summary.most_read.is_empty() {
        println!("Most read:     (nothing read yet)");
    } else {
        println!("Most read:     {}", summary.most_read.join(", "));
    }

    match &summary.highest_rated {
        Some(rated) => println!("Highest rated: {} ({:.2})", rated.title, rated.average),
        None => println!("Highest rated: (no ratings yet)"),
    }

    print_standings(&format!("Top {} books", top), &summary.top_books, "reads");
    print_standings(&format!("Top {} readers", top), &summary.top_readers, "books");

    Ok(())
}

fn print_standings(heading: &str, standings: &[Standing], unit: &str) {
    println!("{}:", heading);
    for (rank, standing) in standings.iter().enumerate() {
        println!("  {}. {} ({} {})", rank + 1, standing.name, standing.count, unit);
    }
}
