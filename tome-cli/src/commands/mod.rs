//! CLI command implementations

mod catalog;
mod readers;
mod seed;
mod stats;
mod validate;

pub use catalog::catalog;
pub use readers::readers;
pub use stats::stats;
pub use validate::validate;
