//! Store module - the read seam between the inquiry pipeline and the archive.
//!
//! The pipeline never composes store-specific queries. It reads whole
//! collections, asks for events through an [`EventFilter`], and resolves
//! event links through [`StoryStore::populate`].

mod archive;
mod loader;

pub use archive::*;

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::entities::{
    Chapter, Character, CharacterId, EntityKind, Event, EventId, Place, PlaceId, PopulatedEvent,
    Relation, StoryObject,
};

/// Errors raised by a story store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not serve a read.
    #[error("story store unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read story file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed story file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A record refers to another record by a name that does not exist.
    #[error("unknown {kind} reference '{name}'")]
    UnknownReference { kind: &'static str, name: String },

    /// Two records of the same kind share a name, so name references would be ambiguous.
    #[error("{kind} '{name}' is defined twice")]
    DuplicateName { kind: &'static str, name: String },

    #[error("chapter {0} is defined twice")]
    DuplicateChapter(u32),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A text predicate the store evaluates against event names and descriptions.
pub trait TextPattern {
    /// Check whether the pattern occurs in `text`.
    fn is_match(&self, text: &str) -> bool;

    /// Source form of the pattern, for logs.
    fn as_str(&self) -> &str;
}

/// A conjunction of optional clauses over events.
///
/// Each clause is a disjunction: an event passes the verb clause if any
/// pattern matches its name or description, the character clause if it
/// involves any of the characters, and so on. Empty clauses are omitted, so
/// a filter without clauses matches every event.
#[derive(Default)]
pub struct EventFilter<'a> {
    pub verb_patterns: Vec<&'a dyn TextPattern>,
    pub character_ids: HashSet<CharacterId>,
    pub place_ids: HashSet<PlaceId>,
    pub event_ids: HashSet<EventId>,
}

impl<'a> EventFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns<P: TextPattern + 'a>(mut self, patterns: &'a [P]) -> Self {
        self.verb_patterns
            .extend(patterns.iter().map(|p| p as &dyn TextPattern));
        self
    }

    pub fn with_characters(mut self, ids: impl IntoIterator<Item = CharacterId>) -> Self {
        self.character_ids.extend(ids);
        self
    }

    pub fn with_places(mut self, ids: impl IntoIterator<Item = PlaceId>) -> Self {
        self.place_ids.extend(ids);
        self
    }

    pub fn with_events(mut self, ids: impl IntoIterator<Item = EventId>) -> Self {
        self.event_ids.extend(ids);
        self
    }

    /// Evaluate the filter against a single event.
    pub fn matches(&self, event: &Event) -> bool {
        if !self.verb_patterns.is_empty() {
            let description = event.description.as_deref().unwrap_or("");
            let verb_hit = self
                .verb_patterns
                .iter()
                .any(|p| p.is_match(&event.name) || p.is_match(description));
            if !verb_hit {
                return false;
            }
        }

        if !self.character_ids.is_empty()
            && !event
                .involved_characters
                .iter()
                .any(|c| self.character_ids.contains(c))
        {
            return false;
        }

        if !self.place_ids.is_empty()
            && !event
                .related_place
                .is_some_and(|p| self.place_ids.contains(&p))
        {
            return false;
        }

        self.event_ids.is_empty() || self.event_ids.contains(&event.id)
    }
}

impl std::fmt::Debug for EventFilter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventFilter")
            .field(
                "verb_patterns",
                &self.verb_patterns.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
            )
            .field("character_ids", &self.character_ids)
            .field("place_ids", &self.place_ids)
            .field("event_ids", &self.event_ids)
            .finish()
    }
}

/// Read access to a story archive.
///
/// Implementations return fresh copies on every call; callers never cache
/// between requests.
pub trait StoryStore {
    fn characters(&self) -> StoreResult<Vec<Character>>;

    fn places(&self) -> StoreResult<Vec<Place>>;

    fn objects(&self) -> StoreResult<Vec<StoryObject>>;

    /// Every event, in archive order.
    fn events(&self) -> StoreResult<Vec<Event>>;

    /// Events passing the filter, in archive order.
    fn find_events(&self, filter: &EventFilter<'_>) -> StoreResult<Vec<Event>>;

    /// Events with the given ids, in archive order. Unknown ids are skipped.
    fn events_by_ids(&self, ids: &[EventId]) -> StoreResult<Vec<Event>>;

    fn find_chapter_by_number(&self, number: u32) -> StoreResult<Option<Chapter>>;

    /// Resolve the requested links of an event into full records.
    fn populate(&self, event: Event, relations: &[Relation]) -> StoreResult<PopulatedEvent>;

    /// Names of every stored entity of a kind (a name-only projection).
    fn list_names(&self, kind: EntityKind) -> StoreResult<Vec<String>> {
        Ok(match kind {
            EntityKind::Character => self.characters()?.into_iter().map(|c| c.name).collect(),
            EntityKind::Place => self.places()?.into_iter().map(|p| p.name).collect(),
            EntityKind::Object => self.objects()?.into_iter().map(|o| o.name).collect(),
        })
    }

    /// Populate every event with all relations.
    fn populate_all(&self, events: Vec<Event>) -> StoreResult<Vec<PopulatedEvent>> {
        events
            .into_iter()
            .map(|event| self.populate(event, &Relation::ALL))
            .collect()
    }
}

impl<T: StoryStore + ?Sized> StoryStore for &T {
    fn characters(&self) -> StoreResult<Vec<Character>> {
        (**self).characters()
    }

    fn places(&self) -> StoreResult<Vec<Place>> {
        (**self).places()
    }

    fn objects(&self) -> StoreResult<Vec<StoryObject>> {
        (**self).objects()
    }

    fn events(&self) -> StoreResult<Vec<Event>> {
        (**self).events()
    }

    fn find_events(&self, filter: &EventFilter<'_>) -> StoreResult<Vec<Event>> {
        (**self).find_events(filter)
    }

    fn events_by_ids(&self, ids: &[EventId]) -> StoreResult<Vec<Event>> {
        (**self).events_by_ids(ids)
    }

    fn find_chapter_by_number(&self, number: u32) -> StoreResult<Option<Chapter>> {
        (**self).find_chapter_by_number(number)
    }

    fn populate(&self, event: Event, relations: &[Relation]) -> StoreResult<PopulatedEvent> {
        (**self).populate(event, relations)
    }

    fn list_names(&self, kind: EntityKind) -> StoreResult<Vec<String>> {
        (**self).list_names(kind)
    }
}
