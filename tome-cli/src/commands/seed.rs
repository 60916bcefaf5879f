//! Seed file loading shared by every command

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tome_core::{Catalog, CatalogSeed, SeedReport};

/// Read a seed file and replay it into a fresh catalog
pub fn load(path: &str) -> Result<(Catalog, SeedReport)> {
    let text = fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to open seed file: {}", path))?;

    let seed = CatalogSeed::from_json(&text)
        .with_context(|| format!("Failed to parse seed file: {}", path))?;

    let mut catalog = Catalog::new();
    let report = seed
        .apply(&mut catalog)
        .with_context(|| format!("Failed to apply seed file: {}", path))?;

    tracing::debug!(
        "Loaded {} books and {} readers from {}",
        catalog.book_count(),
        catalog.reader_count(),
        path
    );

    Ok((catalog, report))
}
