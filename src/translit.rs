//! Greek -> Latin transliteration
//!
//! Produces the lowercase Latin search key stored alongside each Greek
//! headword. The mapping is deliberately lossy: eta and omega collapse to
//! plain `e`/`o` rather than macroned vowels, which is what users type
//! when searching in Latin notation.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fixed Greek-to-Latin mapping, both cases. Final sigma has no uppercase
/// form, so the uppercase side has one fewer entry. Anything outside the
/// table passes through unchanged.
fn latin_for(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'α' => "a",
        'β' => "b",
        'γ' => "g",
        'δ' => "d",
        'ε' => "e",
        'ζ' => "z",
        'η' => "e",
        'θ' => "th",
        'ι' => "i",
        'κ' => "k",
        'λ' => "l",
        'μ' => "m",
        'ν' => "n",
        'ξ' => "x",
        'ο' => "o",
        'π' => "p",
        'ρ' => "r",
        'σ' => "s",
        'ς' => "s",
        'τ' => "t",
        'υ' => "u",
        'φ' => "ph",
        'χ' => "ch",
        'ψ' => "ps",
        'ω' => "o",
        'Α' => "A",
        'Β' => "B",
        'Γ' => "G",
        'Δ' => "D",
        'Ε' => "E",
        'Ζ' => "Z",
        'Η' => "E",
        'Θ' => "Th",
        'Ι' => "I",
        'Κ' => "K",
        'Λ' => "L",
        'Μ' => "M",
        'Ν' => "N",
        'Ξ' => "X",
        'Ο' => "O",
        'Π' => "P",
        'Ρ' => "R",
        'Σ' => "S",
        'Τ' => "T",
        'Υ' => "U",
        'Φ' => "Ph",
        'Χ' => "Ch",
        'Ψ' => "Ps",
        'Ω' => "O",
        _ => return None,
    };
    Some(latin)
}

/// Convert Greek text to its lowercase Latin transliteration.
///
/// The input is NFD-decomposed so accents, breathing marks and iota
/// subscripts separate from their base letters; every combining mark is
/// then dropped before the character table applies. Total over all
/// inputs: already-Latin text comes back lower-cased, the empty string
/// comes back empty.
pub fn greek_to_latin(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.nfd().filter(|ch| !is_combining_mark(*ch)) {
        match latin_for(ch) {
            Some(latin) => result.push_str(latin),
            None => result.push(ch),
        }
    }
    result.to_lowercase()
}
