//! On-disk store for the lexicon and the per-text vocabulary files
//!
//! The master lexicon is load-fatal and written wholesale: a run either
//! completes and rewrites the file once, or aborts before any write.
//! Vocabulary source files are best-effort: missing files, invalid JSON
//! and unrecognized shapes are warned about and contribute zero entries.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::error::LexiconError;
use crate::lexicon::LexiconEntry;

/// Master lexicon filename inside the texts directory.
pub const LEXICON_FILE: &str = "lexicon.json";

/// Load the master lexicon. Missing file or invalid JSON is fatal.
pub fn load_lexicon(texts_dir: &Path) -> Result<Vec<LexiconEntry>, LexiconError> {
    let raw = fs::read_to_string(texts_dir.join(LEXICON_FILE))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Rewrite the master lexicon wholesale: 2-space indentation, non-ASCII
/// characters emitted literally, trailing newline.
pub fn save_lexicon(texts_dir: &Path, entries: &[LexiconEntry]) -> Result<(), LexiconError> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    fs::write(texts_dir.join(LEXICON_FILE), json)?;
    Ok(())
}

/// Load one per-text vocabulary file, tolerating the two shapes in use:
/// a bare array of entries, or an object with a `words` array. Anything
/// else — including a missing or unparsable file — yields an empty list
/// with a warning. Elements that are not entry objects are dropped.
pub fn load_vocabulary(texts_dir: &Path, filename: &str) -> Vec<LexiconEntry> {
    let path = texts_dir.join(filename);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("{} not found, skipping", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!("{} unreadable ({}), skipping", path.display(), e);
            return Vec::new();
        }
    };

    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(_) => {
            warn!("{} has invalid JSON format, skipping", path.display());
            return Vec::new();
        }
    };

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("words") {
            Some(Value::Array(items)) => items,
            _ => {
                warn!("unexpected structure in {}", filename);
                return Vec::new();
            }
        },
        _ => {
            warn!("unexpected structure in {}", filename);
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<LexiconEntry>(item).ok())
        .collect()
}
