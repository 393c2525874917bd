//! Existence questions: "¿Hubo alguna guerra?", "¿Existe el hielo?".
//!
//! Templates are tried in order and the first match wins. Longer templates
//! come first because the shorter ones are their prefixes ("hubo alguna X"
//! would otherwise be read as "hubo X" with X = "alguna ...").

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::text::fold;

const SOME: &str = r"alg(?:una|uno|ún|un)s?";

static TEMPLATES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(r"^hubo\s+{SOME}\s+(.+)$"),
        r"^hubo\s+(.+)$".to_string(),
        format!(r"^existen?\s+{SOME}\s+(.+)$"),
        r"^existen?\s+(.+)$".to_string(),
        r"^exist(?:ió|io)\s+(.+)$".to_string(),
        format!(r"^hay\s+{SOME}\s+(.+)$"),
        r"^hay\s+(.+)$".to_string(),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("existence template"))
    .collect()
});

/// The queried term of an existence question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExistenceQuery {
    /// The term as the user wrote it, lowercased.
    pub term: String,

    /// The folded term used for matching.
    pub folded: String,
}

/// Recognise an existence question and extract its term.
pub fn detect_existence(question: &str) -> Option<ExistenceQuery> {
    let cleaned = question
        .trim()
        .trim_start_matches(['¿', '?'])
        .trim_end_matches(['¿', '?'])
        .trim()
        .to_lowercase();

    let captured = TEMPLATES
        .iter()
        .find_map(|template| template.captures(&cleaned))?;

    let term = captured[1]
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || matches!(c, '¡' | '¿' | '…'))
        .trim()
        .to_string();
    if term.is_empty() {
        return None;
    }

    let folded = fold(&term);
    tracing::debug!(term = %term, "existence question detected");
    Some(ExistenceQuery { term, folded })
}

/// The folded term of an existence question, if the question is one.
pub fn detect_existence_term(question: &str) -> Option<String> {
    detect_existence(question).map(|query| query.folded)
}
