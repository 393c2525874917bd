//! Entity mention detection and record resolution.
//!
//! Two deliberately different passes:
//!
//! - [`match_entities`] decides which stored names a question mentions. It
//!   is loose: any single word of a name appearing anywhere in the question
//!   counts, so "Buendía" mentions every Buendía and short fragments can
//!   over-match. The fallback cascade relies on this recall.
//! - [`resolve_character_ids`] and friends map the mentioned names back to
//!   records with an exact, case-insensitive comparison.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use story_world::{CharacterId, EntityKind, EventId, PlaceId, StoreResult, StoryStore};

use crate::text::{fold, normalize};

static TRAILING_ALIAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s*\(([^()]*)\)\s*$").expect("alias regex"));

/// A stored name split into its folded name and optional folded alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameParts {
    pub name: String,
    pub alias: Option<String>,
}

/// Split a trailing parenthetical alias off a stored name.
///
/// `"José Arcadio (el Grande)"` becomes `jose arcadio` / `el grande`. A name
/// without a parenthetical is folded as a whole and has no alias.
pub fn extract_alias(stored_name: &str) -> NameParts {
    match TRAILING_ALIAS.captures(stored_name) {
        Some(caps) => {
            let alias = fold(caps[2].trim());
            NameParts {
                name: fold(caps[1].trim()),
                alias: (!alias.is_empty()).then_some(alias),
            }
        }
        None => NameParts {
            name: fold(stored_name),
            alias: None,
        },
    }
}

/// Check whether a normalized question mentions a stored name.
///
/// Matches when the whole name, the alias (characters only), or any single
/// word of the name of at least `min_token_len` characters is a substring of
/// the question. Names are compared both folded and normalized so plural
/// reduction in the question cannot hide them.
pub fn matches_loosely(
    stored_name: &str,
    kind: EntityKind,
    normalized_question: &str,
    min_token_len: usize,
) -> bool {
    let parts = match kind {
        EntityKind::Character => extract_alias(stored_name),
        EntityKind::Place | EntityKind::Object => NameParts {
            name: fold(stored_name),
            alias: None,
        },
    };

    let normalized_name = normalize(&parts.name);
    let mut whole_forms = vec![parts.name.trim(), normalized_name.as_str()];
    let normalized_alias = parts.alias.as_deref().map(normalize);
    if let Some(alias) = parts.alias.as_deref() {
        whole_forms.push(alias.trim());
    }
    if let Some(alias) = normalized_alias.as_deref() {
        whole_forms.push(alias);
    }

    let whole_hit = whole_forms
        .iter()
        .any(|form| !form.is_empty() && normalized_question.contains(form));

    whole_hit
        || parts
            .name
            .split_whitespace()
            .chain(normalized_name.split_whitespace())
            .filter(|token| token.chars().count() >= min_token_len)
            .any(|token| normalized_question.contains(token))
}

/// Stored names of `kind` that the question mentions, trimmed but otherwise
/// as stored.
pub fn match_entities<S: StoryStore>(
    store: &S,
    kind: EntityKind,
    normalized_question: &str,
    min_token_len: usize,
) -> StoreResult<Vec<String>> {
    let matched: Vec<String> = store
        .list_names(kind)?
        .into_iter()
        .filter(|name| matches_loosely(name, kind, normalized_question, min_token_len))
        .map(|name| name.trim().to_string())
        .collect();

    if !matched.is_empty() {
        tracing::debug!(kind = %kind, names = ?matched, "entities mentioned");
    }
    Ok(matched)
}

fn same_name(stored: &str, mentioned: &[String]) -> bool {
    let stored = stored.trim().to_lowercase();
    mentioned.iter().any(|m| m.trim().to_lowercase() == stored)
}

/// Ids of the characters whose stored name equals one of `names`.
pub fn resolve_character_ids<S: StoryStore>(
    store: &S,
    names: &[String],
) -> StoreResult<Vec<CharacterId>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    Ok(store
        .characters()?
        .into_iter()
        .filter(|c| same_name(&c.name, names))
        .map(|c| c.id)
        .collect())
}

/// Ids of the places whose stored name equals one of `names`.
pub fn resolve_place_ids<S: StoryStore>(store: &S, names: &[String]) -> StoreResult<Vec<PlaceId>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    Ok(store
        .places()?
        .into_iter()
        .filter(|p| same_name(&p.name, names))
        .map(|p| p.id)
        .collect())
}

/// Ids of the events referenced by the objects named in `names`.
pub fn resolve_object_event_ids<S: StoryStore>(
    store: &S,
    names: &[String],
) -> StoreResult<Vec<EventId>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let mut ids: Vec<EventId> = Vec::new();
    for object in store.objects()? {
        if let Some(event) = object.event.filter(|_| same_name(&object.name, names)) {
            if !ids.contains(&event) {
                ids.push(event);
            }
        }
    }
    Ok(ids)
}
