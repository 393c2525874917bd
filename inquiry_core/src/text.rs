//! Text folding and normalization.
//!
//! - [`fold`]: case and accent folding only, for near-literal comparisons
//!   against stored names.
//! - [`normalize`]: `fold`, punctuation removal, and a light Spanish plural
//!   reduction so "guerras" and "guerra" compare equal.

use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Words this short are never singularised ("dios", "tres", "mes").
const MIN_PLURAL_LEN: usize = 5;

/// Lowercase and strip diacritics (NFD, then drop combining marks).
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Fold, replace punctuation with spaces, collapse whitespace and reduce
/// plurals word by word.
pub fn normalize(text: &str) -> String {
    let folded: String = fold(text)
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let normalized = folded
        .split_whitespace()
        .map(singularize)
        .collect::<Vec<_>>()
        .join(" ");

    tracing::trace!(input = text, output = %normalized, "normalized text");
    normalized
}

/// Set of whitespace-delimited tokens.
pub fn tokens(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}

/// Reduce a folded Spanish word to a singular-looking stem.
///
/// Stems never end in `s`, so the reduction is idempotent.
fn singularize(word: &str) -> String {
    if word.chars().count() < MIN_PLURAL_LEN || word.chars().any(|c| c.is_ascii_digit()) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ces") {
        return format!("{stem}z");
    }

    if let Some(stem) = word.strip_suffix("es") {
        if stem.ends_with(['d', 'l', 'n', 'r', 'j']) {
            return stem.to_string();
        }
    }

    match word.strip_suffix('s') {
        Some(stem) if stem.ends_with(['a', 'e', 'i', 'o', 'u']) => stem.to_string(),
        _ => word.to_string(),
    }
}
