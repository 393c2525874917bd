//! Narrative intents and verb detection.
//!
//! An intent groups the surface forms (conjugations, nouns, synonyms) that
//! all point at the same kind of event. Mentioning any one form in a
//! question activates the whole group, so "murió" also finds events
//! described with "falleció" or "pereció".

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use story_world::TextPattern;

use crate::text::fold;

/// A narrative action category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Die,
    Born,
    Found,
    Marry,
    Kill,
    Fight,
    Travel,
    Live,
    Love,
    Discover,
    Return,
}

impl Intent {
    /// Every intent, in detection order.
    pub const ALL: [Intent; 11] = [
        Intent::Die,
        Intent::Born,
        Intent::Found,
        Intent::Marry,
        Intent::Kill,
        Intent::Fight,
        Intent::Travel,
        Intent::Live,
        Intent::Love,
        Intent::Discover,
        Intent::Return,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Intent::Die => "die",
            Intent::Born => "born",
            Intent::Found => "found",
            Intent::Marry => "marry",
            Intent::Kill => "kill",
            Intent::Fight => "fight",
            Intent::Travel => "travel",
            Intent::Live => "live",
            Intent::Love => "love",
            Intent::Discover => "discover",
            Intent::Return => "return",
        }
    }

    /// Surface forms that express this intent.
    pub fn surface_forms(&self) -> &'static [&'static str] {
        match self {
            Intent::Die => &[
                "murió", "muere", "mueren", "murieron", "morir", "muerte", "falleció",
                "fallecieron", "fallece", "pereció", "perecieron",
            ],
            Intent::Born => &["nació", "nacieron", "nace", "nacer", "nacimiento"],
            Intent::Found => &[
                "fundó", "fundaron", "fundar", "funda", "fundación", "fundador", "fundadores",
            ],
            Intent::Marry => &[
                "se casó", "se casaron", "casarse", "casó", "casaron", "boda", "matrimonio",
            ],
            Intent::Kill => &[
                "mató", "mataron", "matar", "asesinó", "asesinaron", "asesinato", "fusiló",
                "fusilaron", "fusilamiento",
            ],
            Intent::Fight => &[
                "luchó", "lucharon", "luchar", "peleó", "pelearon", "combatió", "combatieron",
                "batalla", "guerra",
            ],
            Intent::Travel => &[
                "viajó", "viajaron", "viajar", "viaje", "partió", "partieron", "llegó",
                "llegaron", "emigró",
            ],
            Intent::Live => &["vivió", "vivieron", "vive", "viven", "vivir", "habitó", "habitaron"],
            Intent::Love => &[
                "amó", "amaron", "amar", "amor", "enamoró", "enamoraron", "enamorado",
                "enamorada",
            ],
            Intent::Discover => &[
                "descubrió", "descubrieron", "descubrir", "descubrimiento", "inventó",
                "inventaron", "invento",
            ],
            Intent::Return => &[
                "volvió", "volvieron", "volver", "regresó", "regresaron", "regresar", "regreso",
            ],
        }
    }

    /// One whole-word pattern per surface form.
    pub fn patterns(&self) -> Vec<VerbPattern> {
        self.surface_forms()
            .iter()
            .map(|form| VerbPattern::new(*self, form))
            .collect()
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Whole-word, case- and accent-insensitive match for one surface form.
#[derive(Debug, Clone, Serialize)]
pub struct VerbPattern {
    pub intent: Intent,

    /// The folded surface form.
    pub form: String,

    #[serde(skip)]
    regex: Regex,
}

impl VerbPattern {
    pub fn new(intent: Intent, surface_form: &str) -> Self {
        let form = fold(surface_form);
        let regex = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&form)))
            .case_insensitive(true)
            .build()
            .expect("escaped surface form is a valid regex");
        Self {
            intent,
            form,
            regex,
        }
    }

    /// Match against text that is already folded.
    pub fn is_match_folded(&self, folded: &str) -> bool {
        self.regex.is_match(folded)
    }
}

impl TextPattern for VerbPattern {
    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(&fold(text))
    }

    fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Intents whose surface forms occur in the question, in taxonomy order.
pub fn detected_intents(question: &str) -> Vec<Intent> {
    let folded = fold(question);
    Intent::ALL
        .into_iter()
        .filter(|intent| {
            intent
                .surface_forms()
                .iter()
                .any(|form| VerbPattern::new(*intent, form).is_match_folded(&folded))
        })
        .collect()
}

/// Patterns for every surface form of every intent mentioned in the question.
///
/// One hit is enough to pull in the whole intent; the remaining forms of
/// that intent are not tested.
pub fn detect_verb_patterns(question: &str) -> Vec<VerbPattern> {
    let folded = fold(question);
    let mut patterns = Vec::new();

    for intent in Intent::ALL {
        let candidates = intent.patterns();
        if let Some(hit) = candidates.iter().find(|p| p.is_match_folded(&folded)) {
            tracing::debug!(intent = %intent, form = %hit.form, "verb intent detected");
            patterns.extend(candidates);
        }
    }

    patterns
}
