//! Error handling for the lexicon tools
//!
//! Only the fatal class of failures surfaces as an error: the master
//! lexicon being unreadable or unparsable, or the final write failing.
//! Per-source problems (a missing or malformed vocabulary file) are
//! warnings that contribute zero entries, never errors.

use thiserror::Error;

/// Fatal error while loading or rewriting the master lexicon.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
