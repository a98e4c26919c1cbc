//! Key-Backfill: attach a Latin `searchKey` to every headword
//!
//! Rewrites the master lexicon with `searchKey` recomputed for every
//! entry that has a `word`, overwriting any existing value. Entry order
//! is preserved; entries without a `word` pass through untouched.

use std::path::Path;

use tracing::info;

use crate::error::LexiconError;
use crate::lexicon::store::{load_lexicon, save_lexicon};
use crate::translit::greek_to_latin;

/// Outcome of a backfill run.
#[derive(Debug)]
pub struct BackfillReport {
    /// Entries whose `searchKey` was set.
    pub updated: usize,
    /// Up to five `(word, searchKey)` pairs for the operator summary.
    pub samples: Vec<(String, String)>,
}

/// Recompute `searchKey` for every entry in `<texts_dir>/lexicon.json`
/// and write the collection back in its original order.
pub fn run(texts_dir: &Path) -> Result<BackfillReport, LexiconError> {
    let mut entries = load_lexicon(texts_dir)?;
    info!("loaded lexicon with {} entries", entries.len());

    let mut updated = 0;
    for entry in &mut entries {
        if let Some(word) = &entry.word {
            entry.search_key = Some(greek_to_latin(word));
            updated += 1;
        }
    }

    save_lexicon(texts_dir, &entries)?;

    let samples = entries
        .iter()
        .filter_map(|e| Some((e.word.clone()?, e.search_key.clone()?)))
        .take(5)
        .collect();

    Ok(BackfillReport { updated, samples })
}
