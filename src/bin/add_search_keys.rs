//! Add Latin transliteration `searchKey` fields to `texts/lexicon.json`,
//! enabling dual-language search in the lexicon (Greek and Latin notation).
//!
//! Usage:
//!   cargo run --bin add_search_keys
//!
//! Takes no arguments; the lexicon path is fixed. Safe to re-run.

use std::path::Path;

use anyhow::Result;
use lexicon_tools::{backfill, TEXTS_DIR};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let report = backfill::run(Path::new(TEXTS_DIR))?;

    println!(
        "Successfully added searchKey fields to {} entries",
        report.updated
    );
    println!("Examples:");
    for (word, key) in &report.samples {
        println!("  {} → {}", word, key);
    }

    Ok(())
}
