//! Fuzzy event ranking by token overlap.

use serde::Serialize;
use story_world::Event;

use crate::text::{normalize, tokens};

/// Default minimum score a best match must strictly exceed.
pub const DEFAULT_FUZZY_THRESHOLD: f32 = 0.2;

/// An event with its similarity to the question.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEvent {
    pub event: Event,
    pub score: f32,
}

/// Share of the question's distinct tokens that also occur in the candidate.
pub fn similarity(question: &str, candidate: &str) -> f32 {
    let question_tokens = tokens(question);
    let candidate_tokens = tokens(candidate);
    let shared = question_tokens.intersection(&candidate_tokens).count();
    shared as f32 / question_tokens.len().max(1) as f32
}

/// Score every event against a normalized question and return the best one
/// if its score is strictly above `threshold`.
///
/// Ties keep store order: the earliest event with the top score wins.
pub fn rank_events(
    normalized_question: &str,
    events: Vec<Event>,
    threshold: f32,
) -> Option<ScoredEvent> {
    let mut scored: Vec<ScoredEvent> = events
        .into_iter()
        .map(|event| {
            let candidate = normalize(&event.text());
            ScoredEvent {
                score: similarity(normalized_question, &candidate),
                event,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let best = scored.into_iter().next()?;
    tracing::debug!(event = %best.event.name, score = best.score, "best fuzzy candidate");
    (best.score > threshold).then_some(best)
}
