//! Query Planner - turns a question into events through a prioritized cascade.
//!
//! The cascade works as follows, each step short-circuiting the rest:
//! 1. **Chapter**: `capítulo N` returns that chapter's events
//! 2. **Analysis**: existence term, verb intents, mentioned entities, fuzzy match
//! 3. **Chapter check**: an abbreviated chapter reference must exist
//! 4. **Similar**: a close fuzzy match returns that single event
//! 5. **Resolution**: mentioned names become record ids
//! 6. **Existence**: every event mentioning the term
//! 7. **Nothing recognised**: no verbs and no ids return no events
//! 8. **Combined filter**: verbs AND characters AND places AND object events
//! 9. **Fallbacks**: object events, then character events, then place events

mod outcome;

pub use outcome::*;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use story_world::{
    CharacterId, EntityKind, Event, EventFilter, EventId, PlaceId, PopulatedEvent, StoreResult,
    StoryStore,
};

use crate::error::{QueryError, QueryResult};
use crate::existence::{detect_existence, ExistenceQuery};
use crate::intents::{detect_verb_patterns, Intent, VerbPattern};
use crate::matching::{
    match_entities, resolve_character_ids, resolve_object_event_ids, resolve_place_ids,
};
use crate::ranking::{rank_events, ScoredEvent, DEFAULT_FUZZY_THRESHOLD};
use crate::text::{fold, normalize};

static EXPLICIT_CHAPTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"capitulo\s*([0-9]+)").expect("chapter regex"));

static CHAPTER_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bcap(?:itulo)?\s*([0-9]+)").expect("chapter reference regex"));

/// Configuration for the query planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Score a fuzzy best match must strictly exceed.
    pub fuzzy_threshold: f32,

    /// Whether to look for a single similar event at all.
    pub fuzzy_enabled: bool,

    /// Shortest name word that counts as a mention on its own. `1` keeps
    /// every word, fragments included.
    pub min_loose_token_len: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            fuzzy_enabled: true,
            min_loose_token_len: 1,
        }
    }
}

impl PlannerConfig {
    /// Parse a planner configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

/// Everything the planner recognised in one question.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub normalized: String,

    /// Chapter referenced in abbreviated or full form.
    pub chapter_number: Option<u32>,

    pub existence: Option<ExistenceQuery>,
    pub intents: Vec<Intent>,
    pub verb_patterns: Vec<VerbPattern>,
    pub matched_characters: Vec<String>,
    pub matched_places: Vec<String>,
    pub matched_objects: Vec<String>,

    /// Best fuzzy match; never computed for existence questions.
    pub fuzzy_event: Option<ScoredEvent>,
}

impl Analysis {
    /// The folded existence term, if this is an existence question.
    pub fn existence_term(&self) -> Option<&str> {
        self.existence.as_ref().map(|query| query.folded.as_str())
    }
}

/// Record ids the mentioned names resolve to.
#[derive(Debug, Default)]
struct ResolvedIds {
    characters: Vec<CharacterId>,
    places: Vec<PlaceId>,
    object_events: Vec<EventId>,
}

impl ResolvedIds {
    fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.places.is_empty() && self.object_events.is_empty()
    }
}

/// Chapter number of an explicit `capítulo N`, accents and case ignored.
///
/// Only ASCII digits count. A number too large for `u32` saturates to
/// `u32::MAX` so the question still short-circuits.
pub fn explicit_chapter(question: &str) -> Option<u32> {
    EXPLICIT_CHAPTER
        .captures(&fold(question))
        .map(|caps| chapter_number(&caps[1]))
}

fn chapter_reference(normalized: &str) -> Option<u32> {
    CHAPTER_REFERENCE
        .captures(normalized)
        .map(|caps| chapter_number(&caps[1]))
}

/// Parse a run of ASCII digits; only overflow can fail.
fn chapter_number(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

fn validate(question: &str) -> QueryResult<&str> {
    let question = question.trim();
    if question.is_empty() {
        return Err(QueryError::BadInput);
    }
    Ok(question)
}

fn read<T>(result: StoreResult<T>) -> QueryResult<T> {
    result.map_err(|err| {
        tracing::error!(error = %err, "story store read failed");
        QueryError::StoreUnavailable(err)
    })
}

/// Plans and runs questions against a story store.
///
/// Nothing is cached between questions: every call reads fresh entity lists.
pub struct QueryPlanner<S> {
    store: S,
    config: PlannerConfig,
}

impl<S: StoryStore> QueryPlanner<S> {
    pub fn new(store: S, config: PlannerConfig) -> Self {
        Self { store, config }
    }

    /// Create a planner with default configuration.
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, PlannerConfig::default())
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Answer a question.
    pub fn plan(&self, question: &str) -> QueryResult<QueryOutcome> {
        let question = validate(question)?;

        if let Some(number) = explicit_chapter(question) {
            return self.chapter_events(number);
        }

        let analysis = self.analyze(question)?;
        self.execute(analysis)
    }

    /// Run every detector over a question without querying for events.
    pub fn analyze(&self, question: &str) -> QueryResult<Analysis> {
        let question = validate(question)?;
        let normalized = normalize(question);
        let min_token_len = self.config.min_loose_token_len;

        let existence = detect_existence(question);
        let verb_patterns = detect_verb_patterns(question);
        let mut intents: Vec<Intent> = Vec::new();
        for pattern in &verb_patterns {
            if !intents.contains(&pattern.intent) {
                intents.push(pattern.intent);
            }
        }

        let matched_characters = read(match_entities(
            &self.store,
            EntityKind::Character,
            &normalized,
            min_token_len,
        ))?;
        let matched_places = read(match_entities(
            &self.store,
            EntityKind::Place,
            &normalized,
            min_token_len,
        ))?;
        let matched_objects = read(match_entities(
            &self.store,
            EntityKind::Object,
            &normalized,
            min_token_len,
        ))?;

        let fuzzy_event = if existence.is_none() && self.config.fuzzy_enabled {
            rank_events(
                &normalized,
                read(self.store.events())?,
                self.config.fuzzy_threshold,
            )
        } else {
            None
        };

        Ok(Analysis {
            chapter_number: chapter_reference(&normalized),
            normalized,
            existence,
            intents,
            verb_patterns,
            matched_characters,
            matched_places,
            matched_objects,
            fuzzy_event,
        })
    }

    /// Run the cascade for an analysed question.
    pub fn execute(&self, analysis: Analysis) -> QueryResult<QueryOutcome> {
        if let Some(number) = analysis.chapter_number {
            if read(self.store.find_chapter_by_number(number))?.is_none() {
                tracing::debug!(chapter = number, "referenced chapter does not exist");
                return Err(QueryError::ChapterNotFound(number));
            }
        }

        if analysis.existence.is_none() {
            if let Some(best) = analysis.fuzzy_event {
                tracing::debug!(event = %best.event.name, score = best.score, "answering with similar event");
                let event = read(self.store.populate_all(vec![best.event]))?
                    .into_iter()
                    .next();
                if let Some(event) = event {
                    return Ok(QueryOutcome::Similar { event });
                }
            }
        }

        let ids = self.resolve(
            &analysis.matched_characters,
            &analysis.matched_places,
            &analysis.matched_objects,
        )?;

        if let Some(existence) = analysis.existence {
            return self.existence_events(existence);
        }

        if analysis.verb_patterns.is_empty() && ids.is_empty() {
            tracing::debug!("no verbs or entities recognised");
            return Ok(QueryOutcome::All { events: Vec::new() });
        }

        let filter = EventFilter::new()
            .with_patterns(&analysis.verb_patterns)
            .with_characters(ids.characters.iter().copied())
            .with_places(ids.places.iter().copied())
            .with_events(ids.object_events.iter().copied());
        tracing::debug!(?filter, "querying with combined filter");

        let events = read(self.store.find_events(&filter))?;
        let events = if events.is_empty() {
            self.fallback(&ids)?
        } else {
            events
        };

        Ok(QueryOutcome::All {
            events: self.populate(events)?,
        })
    }

    fn resolve(
        &self,
        characters: &[String],
        places: &[String],
        objects: &[String],
    ) -> QueryResult<ResolvedIds> {
        Ok(ResolvedIds {
            characters: read(resolve_character_ids(&self.store, characters))?,
            places: read(resolve_place_ids(&self.store, places))?,
            object_events: read(resolve_object_event_ids(&self.store, objects))?,
        })
    }

    /// Looser queries tried in priority order; the first non-empty one wins.
    fn fallback(&self, ids: &ResolvedIds) -> QueryResult<Vec<Event>> {
        if !ids.object_events.is_empty() {
            let events = read(self.store.events_by_ids(&ids.object_events))?;
            if !events.is_empty() {
                tracing::debug!(count = events.len(), "fallback: events of mentioned objects");
                return Ok(events);
            }
        }

        if !ids.characters.is_empty() {
            let filter = EventFilter::new().with_characters(ids.characters.iter().copied());
            let events = read(self.store.find_events(&filter))?;
            if !events.is_empty() {
                tracing::debug!(count = events.len(), "fallback: events of mentioned characters");
                return Ok(events);
            }
        }

        if !ids.places.is_empty() {
            let filter = EventFilter::new().with_places(ids.places.iter().copied());
            let events = read(self.store.find_events(&filter))?;
            if !events.is_empty() {
                tracing::debug!(count = events.len(), "fallback: events at mentioned places");
                return Ok(events);
            }
        }

        tracing::debug!("fallbacks exhausted");
        Ok(Vec::new())
    }

    fn chapter_events(&self, number: u32) -> QueryResult<QueryOutcome> {
        let Some(chapter) = read(self.store.find_chapter_by_number(number))? else {
            tracing::debug!(chapter = number, "explicit chapter not in store");
            return Ok(QueryOutcome::Chapter {
                number,
                events: Vec::new(),
            });
        };

        let mut by_id: HashMap<EventId, Event> = read(self.store.events_by_ids(&chapter.events))?
            .into_iter()
            .map(|event| (event.id, event))
            .collect();
        let ordered = chapter
            .events
            .iter()
            .filter_map(|id| by_id.remove(id))
            .collect();

        Ok(QueryOutcome::Chapter {
            number,
            events: self.populate(ordered)?,
        })
    }

    /// Scan every event for the folded term; no other clause applies.
    fn existence_events(&self, query: ExistenceQuery) -> QueryResult<QueryOutcome> {
        let events: Vec<Event> = read(self.store.events())?
            .into_iter()
            .filter(|event| fold(&event.text()).contains(&query.folded))
            .collect();

        tracing::debug!(term = %query.term, count = events.len(), "existence scan");
        Ok(QueryOutcome::Existence {
            term: query.term,
            events: self.populate(events)?,
        })
    }

    fn populate(&self, events: Vec<Event>) -> QueryResult<Vec<PopulatedEvent>> {
        read(self.store.populate_all(events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_world::{
        Chapter, Character, Place, Relation, StoreError, StoryArchive, StoryObject,
    };

    const MACONDO: &str = include_str!("../../../data/macondo.toml");

    fn archive() -> StoryArchive {
        StoryArchive::from_toml_str(MACONDO).unwrap()
    }

    fn without_fuzzy() -> PlannerConfig {
        PlannerConfig {
            fuzzy_enabled: false,
            ..PlannerConfig::default()
        }
    }

    fn names(outcome: &QueryOutcome) -> Vec<&str> {
        outcome.events().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_explicit_chapter_keeps_chapter_order() {
        let planner = QueryPlanner::with_defaults(archive());
        let outcome = planner.plan("¿Qué pasa en el capítulo 1?").unwrap();

        assert_eq!(outcome.tag(), ChapterTag::Number(1));
        assert_eq!(
            names(&outcome),
            vec![
                "Llegada de los gitanos",
                "Fundación de Macondo",
                "Expedición a la ciénaga"
            ]
        );

        let founding = &outcome.events()[1];
        assert_eq!(founding.characters.len(), 2);
        assert_eq!(founding.place.as_ref().unwrap().name, "Macondo");
        assert_eq!(
            founding.generation.as_ref().unwrap().name.as_deref(),
            Some("Fundadores")
        );
    }

    #[test]
    fn test_missing_explicit_chapter_is_empty_not_error() {
        let planner = QueryPlanner::with_defaults(archive());
        let outcome = planner.plan("capítulo 3").unwrap();

        assert_eq!(
            outcome,
            QueryOutcome::Chapter {
                number: 3,
                events: Vec::new()
            }
        );
    }

    #[test]
    fn test_explicit_chapter_ignores_case_and_accents() {
        let planner = QueryPlanner::with_defaults(archive());
        let outcome = planner.plan("CAPITULO 5").unwrap();
        assert_eq!(outcome.events().len(), 3);
        assert_eq!(explicit_chapter("Capítulo12"), Some(12));
        assert_eq!(explicit_chapter("¿Quién murió?"), None);
    }

    #[test]
    fn test_oversized_chapter_number_still_short_circuits() {
        let planner = QueryPlanner::with_defaults(archive());
        let outcome = planner.plan("capítulo 99999999999").unwrap();

        assert_eq!(
            outcome,
            QueryOutcome::Chapter {
                number: u32::MAX,
                events: Vec::new()
            }
        );
        assert_eq!(explicit_chapter("capitulo 4294967296"), Some(u32::MAX));
    }

    #[test]
    fn test_only_ascii_digits_name_a_chapter() {
        assert_eq!(explicit_chapter("capítulo ٣"), None);
        assert_eq!(explicit_chapter("capítulo 3"), Some(3));

        let planner = QueryPlanner::new(archive(), without_fuzzy());
        let analysis = planner.analyze("Resumen del cap ٣").unwrap();
        assert_eq!(analysis.chapter_number, None);

        let outcome = planner.plan("capítulo ٣").unwrap();
        assert_eq!(outcome.tag(), ChapterTag::Label("todos"));
    }

    #[test]
    fn test_abbreviated_oversized_chapter_is_not_found() {
        let planner = QueryPlanner::with_defaults(archive());
        let result = planner.plan("Resumen del cap 99999999999");
        assert!(matches!(result, Err(QueryError::ChapterNotFound(u32::MAX))));
    }

    #[test]
    fn test_blank_question_is_bad_input() {
        let planner = QueryPlanner::with_defaults(archive());
        assert!(matches!(planner.plan("   "), Err(QueryError::BadInput)));
        assert!(matches!(planner.analyze(""), Err(QueryError::BadInput)));
    }

    #[test]
    fn test_abbreviated_missing_chapter_is_not_found() {
        let planner = QueryPlanner::with_defaults(archive());
        let result = planner.plan("¿Qué ocurre en el cap. 9?");
        assert!(matches!(result, Err(QueryError::ChapterNotFound(9))));
    }

    #[test]
    fn test_abbreviated_existing_chapter_continues() {
        let planner = QueryPlanner::new(archive(), without_fuzzy());
        let analysis = planner.analyze("Resumen del cap 2").unwrap();
        assert_eq!(analysis.chapter_number, Some(2));

        let outcome = planner.execute(analysis).unwrap();
        assert_eq!(outcome, QueryOutcome::All { events: Vec::new() });
    }

    #[test]
    fn test_existence_question() {
        let planner = QueryPlanner::with_defaults(archive());
        let outcome = planner.plan("¿Hubo alguna guerra?").unwrap();

        assert_eq!(outcome.tag(), ChapterTag::Label("existencia"));
        assert_eq!(names(&outcome), vec!["Guerra civil"]);
    }

    #[test]
    fn test_existence_keeps_original_term() {
        let planner = QueryPlanner::with_defaults(archive());
        let outcome = planner.plan("¿Hubo alguna ascensión?").unwrap();

        match &outcome {
            QueryOutcome::Existence { term, events } => {
                assert_eq!(term, "ascensión");
                assert_eq!(events.len(), 1);
                assert_eq!(events[0].name, "Ascensión de Remedios");
            }
            other => panic!("expected existence outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_existence_without_matches() {
        let planner = QueryPlanner::with_defaults(archive());
        let outcome = planner.plan("¿Hubo algún dragón?").unwrap();

        assert_eq!(
            outcome,
            QueryOutcome::Existence {
                term: "dragón".to_string(),
                events: Vec::new()
            }
        );
    }

    #[test]
    fn test_existence_skips_fuzzy_ranking() {
        let planner = QueryPlanner::with_defaults(archive());
        let analysis = planner.analyze("¿Hubo guerra civil?").unwrap();

        assert_eq!(analysis.existence_term(), Some("guerra civil"));
        assert!(analysis.fuzzy_event.is_none());
    }

    #[test]
    fn test_similar_event() {
        let planner = QueryPlanner::with_defaults(archive());
        let outcome = planner.plan("Fusilamiento frustrado").unwrap();

        assert_eq!(outcome.tag(), ChapterTag::Label("similar"));
        assert_eq!(names(&outcome), vec!["Fusilamiento frustrado"]);
        assert_eq!(outcome.events()[0].characters.len(), 1);
    }

    #[test]
    fn test_similar_event_preempts_entity_filter() {
        let planner = QueryPlanner::with_defaults(archive());
        let outcome = planner.plan("¿Dónde vivió José Arcadio Buendía?").unwrap();

        assert_eq!(outcome.tag(), ChapterTag::Label("similar"));
        assert_eq!(names(&outcome), vec!["Fundación de Macondo"]);
    }

    #[test]
    fn test_verb_and_character_filter() {
        let planner = QueryPlanner::new(archive(), without_fuzzy());

        let analysis = planner.analyze("¿Cómo murió Melquíades?").unwrap();
        assert_eq!(analysis.intents, vec![Intent::Die]);
        assert_eq!(analysis.matched_characters, vec!["Melquíades"]);
        assert!(analysis.matched_places.is_empty());

        let outcome = planner.execute(analysis).unwrap();
        assert_eq!(outcome.tag(), ChapterTag::Label("todos"));
        assert_eq!(names(&outcome), vec!["Muerte de Melquíades"]);
    }

    #[test]
    fn test_multiple_intents_with_place() {
        let planner = QueryPlanner::new(archive(), without_fuzzy());
        let outcome = planner.plan("¿Quién nació y murió en Macondo?").unwrap();

        assert_eq!(
            names(&outcome),
            vec!["Muerte de Melquíades", "Nacimiento de Aureliano"]
        );
    }

    #[test]
    fn test_verb_only_question() {
        let planner = QueryPlanner::new(archive(), without_fuzzy());
        let outcome = planner.plan("¿Quién se casó?").unwrap();

        assert_eq!(names(&outcome), vec!["Matrimonio del coronel"]);
    }

    #[test]
    fn test_character_fallback_when_filter_is_empty() {
        let planner = QueryPlanner::new(archive(), without_fuzzy());

        let analysis = planner.analyze("¿Dónde vivió José Arcadio Buendía?").unwrap();
        assert!(analysis
            .matched_characters
            .contains(&"José Arcadio Buendía".to_string()));
        // Every Buendía is mentioned by the shared surname.
        assert!(analysis
            .matched_characters
            .contains(&"Aureliano Buendía (el coronel)".to_string()));

        let outcome = planner.execute(analysis).unwrap();
        let found = names(&outcome);
        assert_eq!(outcome.tag(), ChapterTag::Label("todos"));
        assert_eq!(found[0], "Fundación de Macondo");
        assert!(found.contains(&"Expedición a la ciénaga"));
    }

    #[test]
    fn test_place_fallback() {
        let planner = QueryPlanner::new(archive(), without_fuzzy());
        let outcome = planner.plan("¿Quién regresó a la Ciénaga Grande?").unwrap();

        assert_eq!(names(&outcome), vec!["Expedición a la ciénaga"]);
    }

    #[test]
    fn test_fallbacks_exhausted() {
        let planner = QueryPlanner::new(archive(), without_fuzzy());
        let outcome = planner.plan("¿Quién viajó a Riohacha?").unwrap();

        assert_eq!(outcome, QueryOutcome::All { events: Vec::new() });
    }

    #[test]
    fn test_nothing_recognised() {
        let planner = QueryPlanner::new(archive(), without_fuzzy());
        let outcome = planner.plan("¿Qué tal?").unwrap();

        assert_eq!(outcome, QueryOutcome::All { events: Vec::new() });
    }

    fn fallback_archive() -> StoryArchive {
        let mut archive = StoryArchive::new();
        let petra = archive.add_character(Character::new("Petra Cotes"));
        let riohacha = archive.add_place(Place::new("Riohacha", ""));

        archive.add_event(Event::new("Rifas de animales").with_character(petra));
        archive.add_event(Event::new("Mercado costero").with_place(riohacha));
        let duel = archive.add_event(Event::new("Duelo de honor"));
        archive.add_object(StoryObject::new("Espada", "").with_event(duel));
        archive
    }

    #[test]
    fn test_object_fallback_has_priority() {
        let planner = QueryPlanner::new(fallback_archive(), without_fuzzy());
        let outcome = planner
            .plan("¿Murió Petra Cotes en Riohacha con la espada?")
            .unwrap();

        assert_eq!(names(&outcome), vec!["Duelo de honor"]);
    }

    #[test]
    fn test_character_fallback_before_place_fallback() {
        let planner = QueryPlanner::new(fallback_archive(), without_fuzzy());

        let outcome = planner.plan("¿Murió Petra Cotes en Riohacha?").unwrap();
        assert_eq!(names(&outcome), vec!["Rifas de animales"]);

        let outcome = planner.plan("¿Murió alguien en Riohacha?").unwrap();
        assert_eq!(names(&outcome), vec!["Mercado costero"]);
    }

    #[test]
    fn test_combined_filter_hit_skips_fallbacks() {
        let mut archive = fallback_archive();
        let petra = archive.characters().unwrap()[0].id;
        archive.add_event(Event::new("Petra murió en su cama").with_character(petra));

        let planner = QueryPlanner::new(&archive, without_fuzzy());
        let outcome = planner.plan("¿Murió Petra Cotes?").unwrap();

        assert_eq!(names(&outcome), vec!["Petra murió en su cama"]);
    }

    #[test]
    fn test_min_token_len_from_config() {
        let mut archive = StoryArchive::new();
        archive.add_character(Character::new("Santa Sofía de la Piedad"));

        let planner = QueryPlanner::new(&archive, without_fuzzy());
        let analysis = planner.analyze("¿Murió la madre?").unwrap();
        assert_eq!(analysis.matched_characters, vec!["Santa Sofía de la Piedad"]);

        let config = PlannerConfig::from_toml_str("min_loose_token_len = 4\nfuzzy_enabled = false")
            .unwrap();
        let planner = QueryPlanner::new(&archive, config);
        assert_eq!(planner.config().min_loose_token_len, 4);

        let analysis = planner.analyze("¿Murió la madre?").unwrap();
        assert!(analysis.matched_characters.is_empty());
        let analysis = planner.analyze("¿Murió Santa Sofía?").unwrap();
        assert_eq!(analysis.matched_characters.len(), 1);
    }

    #[test]
    fn test_config_defaults_and_unknown_keys() {
        let config = PlannerConfig::from_toml_str("fuzzy_threshold = 0.5").unwrap();
        assert!((config.fuzzy_threshold - 0.5).abs() < 0.001);
        assert!(config.fuzzy_enabled);
        assert_eq!(config.min_loose_token_len, 1);

        assert!(PlannerConfig::from_toml_str("umbral = 1").is_err());
    }

    struct FailingStore;

    fn unavailable<T>() -> StoreResult<T> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    impl StoryStore for FailingStore {
        fn characters(&self) -> StoreResult<Vec<Character>> {
            unavailable()
        }

        fn places(&self) -> StoreResult<Vec<Place>> {
            unavailable()
        }

        fn objects(&self) -> StoreResult<Vec<StoryObject>> {
            unavailable()
        }

        fn events(&self) -> StoreResult<Vec<Event>> {
            unavailable()
        }

        fn find_events(&self, _filter: &EventFilter<'_>) -> StoreResult<Vec<Event>> {
            unavailable()
        }

        fn events_by_ids(&self, _ids: &[EventId]) -> StoreResult<Vec<Event>> {
            unavailable()
        }

        fn find_chapter_by_number(&self, _number: u32) -> StoreResult<Option<Chapter>> {
            unavailable()
        }

        fn populate(&self, _event: Event, _relations: &[Relation]) -> StoreResult<PopulatedEvent> {
            unavailable()
        }
    }

    #[test]
    fn test_store_failure_is_not_an_empty_result() {
        let planner = QueryPlanner::with_defaults(FailingStore);

        assert!(matches!(
            planner.plan("¿Cómo murió Melquíades?"),
            Err(QueryError::StoreUnavailable(_))
        ));
        assert!(matches!(
            planner.plan("capítulo 1"),
            Err(QueryError::StoreUnavailable(_))
        ));
    }
}
