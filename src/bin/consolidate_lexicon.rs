//! Consolidate vocabulary from the per-text JSON files into
//! `texts/lexicon.json`, so every word appearing in the liturgical texts
//! is present in the main lexicon exactly once.
//!
//! Usage:
//!   cargo run --bin consolidate_lexicon
//!
//! Takes no arguments; paths and the source-file list are fixed. Safe to
//! re-run: a second run finds nothing new and leaves the file untouched.

use std::path::Path;

use anyhow::Result;
use lexicon_tools::{consolidate, TEXTS_DIR};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let report = consolidate::run(Path::new(TEXTS_DIR))?;

    if report.no_updates_needed() {
        println!("All vocabulary from text files is already in lexicon.json");
        println!("No updates needed!");
        return Ok(());
    }

    println!(
        "Successfully updated lexicon.json with {} new entries",
        report.added
    );
    println!("Total entries in lexicon: {}", report.total);

    println!("\nSample of new entries added:");
    for entry in &report.samples {
        println!(
            "  {} → {} ({})",
            entry.word.as_deref().unwrap_or(""),
            entry.gloss.as_deref().unwrap_or(""),
            entry.part_of_speech.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
