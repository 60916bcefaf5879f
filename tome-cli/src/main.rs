//! Tome CLI - Command-line interface for book ratings

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate top argument (must be at least 1)
fn parse_top(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("top must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "tome")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every book in a catalog seed
    Catalog {
        /// Seed file path (JSON)
        seed: String,
    },

    /// List every reader in a catalog seed
    Readers {
        /// Seed file path (JSON)
        seed: String,
    },

    /// Show most read, highest rated and top books and readers
    Stats {
        /// Seed file path (JSON)
        seed: String,

        /// Number of entries in the top books and readers lists
        #[arg(short, long, default_value = "3", value_parser = parse_top)]
        top: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog seed file
    Validate {
        /// Seed file path (JSON)
        seed: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "tome_cli=debug,tome_core=debug"
    } else {
        "tome_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Catalog { seed } => commands::catalog(&seed),

        Commands::Readers { seed } => commands::readers(&seed),

        Commands::Stats { seed, top, json } => commands::stats(&seed, top, json),

        Commands::Validate { seed } => commands::validate(&seed),
    }
}
