//! Lexicon entry data model
//!
//! Entries come from hand-maintained JSON, so the shape is loose: only
//! `word` matters for key derivation, `lemma` falls back to `word` for
//! identity, and any field this tool does not know about is carried
//! through a rewrite untouched via the flattened `extra` map.

pub mod store;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One vocabulary entry in the lexicon or in a per-text word list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Greek headword as it appears in the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,

    /// Canonical dictionary form; identity falls back to `word` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,

    /// Definition, read-only for reporting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,

    #[serde(rename = "partOfSpeech", skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,

    /// Latin transliteration of `word`, derived by these tools.
    #[serde(rename = "searchKey", skip_serializing_if = "Option::is_none")]
    pub search_key: Option<String>,

    /// Fields the tools do not interpret but must not drop on rewrite.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LexiconEntry {
    /// Dedup/sort identity: lower-cased lemma, falling back to the word.
    /// Entries with neither field key on the empty string.
    pub fn identity_key(&self) -> String {
        self.lemma
            .as_deref()
            .or(self.word.as_deref())
            .unwrap_or("")
            .to_lowercase()
    }
}
