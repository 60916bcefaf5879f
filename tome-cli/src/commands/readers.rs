//! Reader listing command implementation

use super::seed;
use anyhow::Result;

/// Print every reader
pub fn readers(path: &str) -> Result<()> {
    let (catalog, _) = seed::load(path)?;

    if catalog.reader_count() == 0 {
        println!("No readers in {}", path);
        return Ok(());
    }

    for reader in catalog.readers() {
        println!("{}", reader);
    }

    Ok(())
}
