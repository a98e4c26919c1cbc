//! Maintenance tools for the liturgical-text lexicon
//!
//! Two operator-run batch tools share this library:
//!
//! - `add_search_keys` rewrites `texts/lexicon.json` with a Latin
//!   transliteration `searchKey` attached to every headword, enabling
//!   dual-script search (Greek and Latin notation).
//! - `consolidate_lexicon` merges vocabulary harvested from the per-text
//!   JSON files into the master lexicon, deduplicating by lemma.
//!
//! Both are one-shot transforms over a file on disk: the collection is
//! loaded fully into memory, transformed, and rewritten once at the end,
//! so an aborted run never leaves a half-written lexicon behind.

// Core error handling
pub mod error;

// Greek -> Latin transliteration
pub mod translit;

// Entry data model and on-disk store
pub mod lexicon;

// The two batch transforms
pub mod backfill;
pub mod consolidate;

pub use error::LexiconError;
pub use lexicon::LexiconEntry;
pub use translit::greek_to_latin;

/// Directory holding the lexicon and the per-text vocabulary files,
/// relative to the invocation directory. Fixed for the life of a run.
pub const TEXTS_DIR: &str = "texts";
