//! Folio CLI - terminal reader for plain-text, EPUB and PDF books

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::config::{DEFAULT_BOOKMARKS_FILE, DEFAULT_BOOKS_DIR, DEFAULT_LINES_PER_PAGE};
use folio_core::{Capabilities, Library, ReaderConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate lines-per-page argument (must be at least 1)
fn parse_lines_per_page(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("lines per page must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing .txt, .epub and .pdf books
    #[arg(long, default_value = DEFAULT_BOOKS_DIR)]
    books_dir: PathBuf,

    /// JSON file storing the last position of each book
    #[arg(long, default_value = DEFAULT_BOOKMARKS_FILE)]
    bookmarks: PathBuf,

    /// Lines shown per page for text books
    #[arg(long, default_value_t = DEFAULT_LINES_PER_PAGE, value_parser = parse_lines_per_page)]
    lines_per_page: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "folio_cli=debug,folio_core=debug"
    } else {
        "folio_cli=warn,folio_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ReaderConfig::new()
        .with_books_dir(&cli.books_dir)
        .with_bookmarks_file(&cli.bookmarks)
        .with_lines_per_page(cli.lines_per_page);

    let capabilities = Capabilities::builtin();
    tracing::debug!("Starting with {:?}", capabilities);

    let library = Library::new(config, capabilities);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    library
        .run(&mut input, &mut output)
        .context("Reading session ended with an error")?;

    Ok(())
}
