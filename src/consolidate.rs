//! Lexicon consolidation: fold per-text vocabulary into the master lexicon
//!
//! Scans the fixed list of liturgical-text vocabulary files in order,
//! stages every entry whose lemma the lexicon does not already know
//! (first occurrence across files wins), backfills missing search keys,
//! and rewrites the lexicon sorted by lemma. When nothing new turns up,
//! the file is left untouched.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::LexiconError;
use crate::lexicon::store::{load_lexicon, load_vocabulary, save_lexicon};
use crate::lexicon::LexiconEntry;
use crate::translit::greek_to_latin;

/// The liturgical-text vocabulary files, in processing order. Order
/// matters: when two files introduce the same lemma, the earlier file's
/// entry is the one that lands in the lexicon.
pub const SOURCE_FILES: [&str; 22] = [
    "annunciation.json",
    "dormition.json",
    "gladsome_light.json",
    "glory_to_the_father.json",
    "heavenly_king.json",
    "holy_cross.json",
    "it_is_truly_meet.json",
    "jesus_prayer.json",
    "kyrie_eleison.json",
    "lords_prayer.json",
    "nativity_of_christ.json",
    "presentation_christ.json",
    "psalm_50.json",
    "the_creed.json",
    "theotokos_nativity.json",
    "theotokos_presentation.json",
    "to_thee_the_champion_leader.json",
    "transfiguration.json",
    "trisagion.json",
    "troparion_nativity.json",
    "troparion_pascha.json",
    "troparion_theophany.json",
];

/// Outcome of a consolidation run.
#[derive(Debug)]
pub struct ConsolidateReport {
    /// Lexicon size before the run.
    pub existing: usize,
    /// Newly staged entries appended to the lexicon.
    pub added: usize,
    /// Lexicon size after the run.
    pub total: usize,
    /// Up to five of the added entries for the operator summary.
    pub samples: Vec<LexiconEntry>,
}

impl ConsolidateReport {
    pub fn no_updates_needed(&self) -> bool {
        self.added == 0
    }
}

/// Merge new vocabulary from [`SOURCE_FILES`] into `<texts_dir>/lexicon.json`.
///
/// The existing-lemma set is computed once up front, so dedup against the
/// lexicon is independent of processing order; dedup across source files
/// goes through the staged set, first occurrence wins. The lexicon is
/// rewritten only when at least one entry was staged.
pub fn run(texts_dir: &Path) -> Result<ConsolidateReport, LexiconError> {
    let mut lexicon = load_lexicon(texts_dir)?;
    info!("existing lexicon has {} entries", lexicon.len());

    let existing: HashSet<String> = lexicon.iter().map(LexiconEntry::identity_key).collect();

    let mut staged_keys: HashSet<String> = HashSet::new();
    let mut staged: Vec<LexiconEntry> = Vec::new();

    for filename in SOURCE_FILES {
        let mut found = 0;
        for mut entry in load_vocabulary(texts_dir, filename) {
            let Some(word) = entry.word.clone() else {
                continue;
            };
            let key = entry.identity_key();
            if existing.contains(&key) || staged_keys.contains(&key) {
                continue;
            }
            if entry.search_key.is_none() {
                entry.search_key = Some(greek_to_latin(&word));
            }
            staged_keys.insert(key);
            staged.push(entry);
            found += 1;
        }
        info!("found {} new entries in {}", found, filename);
    }

    let existing_count = lexicon.len();
    if staged.is_empty() {
        return Ok(ConsolidateReport {
            existing: existing_count,
            added: 0,
            total: existing_count,
            samples: Vec::new(),
        });
    }

    let added = staged.len();
    let samples = staged.iter().take(5).cloned().collect();

    lexicon.extend(staged);
    // stable sort keeps pre-existing duplicate lemmas in their original order
    lexicon.sort_by_key(LexiconEntry::identity_key);
    save_lexicon(texts_dir, &lexicon)?;

    Ok(ConsolidateReport {
        existing: existing_count,
        added,
        total: existing_count + added,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_existing_lemma_is_not_replaced() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "lexicon.json",
            r#"[{"word": "λόγος", "lemma": "λογος", "gloss": "word"}]"#,
        );
        write(
            dir.path(),
            "annunciation.json",
            r#"[{"word": "λόγος", "lemma": "λογος", "gloss": "different gloss"}]"#,
        );
        write(
            dir.path(),
            "dormition.json",
            r#"[{"word": "λόγος", "lemma": "λογος", "gloss": "a third gloss"}]"#,
        );

        let report = run(dir.path()).unwrap();
        assert!(report.no_updates_needed());

        let lexicon = load_lexicon(dir.path()).unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon[0].gloss.as_deref(), Some("word"));
    }

    #[test]
    fn test_first_source_file_wins_across_files() {
        let dir = tempdir().unwrap();
        write(dir.path(), "lexicon.json", "[]");
        // annunciation.json is processed before dormition.json
        write(
            dir.path(),
            "annunciation.json",
            r#"[{"word": "γάμμα", "lemma": "gamma", "gloss": "from A"}]"#,
        );
        write(
            dir.path(),
            "dormition.json",
            r#"[{"word": "γάμμα", "lemma": "gamma", "gloss": "from B"}]"#,
        );

        let report = run(dir.path()).unwrap();
        assert_eq!(report.added, 1);

        let lexicon = load_lexicon(dir.path()).unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon[0].gloss.as_deref(), Some("from A"));
    }

    #[test]
    fn test_collection_is_resorted_by_identity_key() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "lexicon.json",
            r#"[{"word": "beta"}, {"word": "delta"}]"#,
        );
        write(dir.path(), "trisagion.json", r#"[{"word": "alpha"}]"#);

        let report = run(dir.path()).unwrap();
        assert_eq!(report.added, 1);

        let lexicon = load_lexicon(dir.path()).unwrap();
        let words: Vec<_> = lexicon.iter().filter_map(|e| e.word.as_deref()).collect();
        assert_eq!(words, ["alpha", "beta", "delta"]);
    }

    #[test]
    fn test_search_key_backfilled_only_when_absent() {
        let dir = tempdir().unwrap();
        write(dir.path(), "lexicon.json", "[]");
        write(
            dir.path(),
            "psalm_50.json",
            r#"{"words": [
              {"word": "ἐλέησον"},
              {"word": "θεός", "searchKey": "hand-curated"}
            ]}"#,
        );

        let report = run(dir.path()).unwrap();
        assert_eq!(report.added, 2);

        let lexicon = load_lexicon(dir.path()).unwrap();
        let by_word = |w: &str| lexicon.iter().find(|e| e.word.as_deref() == Some(w)).unwrap();
        assert_eq!(by_word("ἐλέησον").search_key.as_deref(), Some("eleeson"));
        assert_eq!(by_word("θεός").search_key.as_deref(), Some("hand-curated"));
    }

    #[test]
    fn test_noop_run_leaves_file_bytes_untouched() {
        let dir = tempdir().unwrap();
        // compact formatting would never survive a rewrite, so byte
        // equality proves no write happened
        write(dir.path(), "lexicon.json", r#"[{"word":"θεός"}]"#);
        write(dir.path(), "trisagion.json", r#"[{"word": "θεός"}]"#);

        // remaining source files are missing: they warn and contribute nothing
        let before = fs::read(dir.path().join("lexicon.json")).unwrap();
        let report = run(dir.path()).unwrap();
        assert!(report.no_updates_needed());
        let after = fs::read(dir.path().join("lexicon.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_lemma_fallback_to_word_for_identity() {
        let dir = tempdir().unwrap();
        // lexicon knows the bare word; source repeats it without a lemma
        write(dir.path(), "lexicon.json", r#"[{"word": "Ἀμήν"}]"#);
        write(dir.path(), "the_creed.json", r#"[{"word": "ἀμήν"}]"#);

        let report = run(dir.path()).unwrap();
        assert!(report.no_updates_needed());
    }

    #[test]
    fn test_entries_without_word_are_ignored() {
        let dir = tempdir().unwrap();
        write(dir.path(), "lexicon.json", "[]");
        write(
            dir.path(),
            "jesus_prayer.json",
            r#"[{"lemma": "orphan"}, {"gloss": "also no word"}]"#,
        );

        let report = run(dir.path()).unwrap();
        assert!(report.no_updates_needed());
    }
}
