//! Validate command implementation

use super::seed;
use anyhow::{bail, Result};

/// Validate a seed file by replaying it into an empty catalog
pub fn validate(path: &str) -> Result<()> {
    match seed::load(path) {
        Ok((catalog, report)) => {
            println!("Valid seed file");
            println!("  Books: {}", catalog.book_count());
            println!("  Readers: {}", catalog.reader_count());
            println!("  Readings: {}", report.readings);
            if report.replaced > 0 {
                println!("  Replaced entries: {}", report.replaced);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Invalid seed file: {:#}", e);
            bail!("Validation failed for {}", path);
        }
    }
}
