//! In-memory story archive - the reference `StoryStore`.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::{EventFilter, StoreError, StoreResult, StoryStore};
use crate::entities::{
    Chapter, Character, CharacterId, Event, EventId, Generation, GenerationId, ObjectId, Place,
    PlaceId, PopulatedEvent, Relation, StoryObject,
};

/// All records of one story, held in memory.
///
/// Records keep insertion order so every read is deterministic. Reverse
/// indices answer "which events involve this character / happen here"
/// without scanning.
#[derive(Debug, Clone, Default)]
pub struct StoryArchive {
    characters: Vec<Character>,
    places: Vec<Place>,
    objects: Vec<StoryObject>,
    generations: Vec<Generation>,
    events: Vec<Event>,

    /// Index: chapter number -> chapter.
    chapter_by_number: HashMap<u32, Chapter>,

    /// Index: character -> events involving them.
    events_by_character: HashMap<CharacterId, HashSet<EventId>>,

    /// Index: place -> events happening there.
    events_by_place: HashMap<PlaceId, HashSet<EventId>>,
}

impl StoryArchive {
    /// Create a new empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_character(&mut self, character: Character) -> CharacterId {
        let id = character.id;
        self.characters.push(character);
        id
    }

    pub fn add_place(&mut self, place: Place) -> PlaceId {
        let id = place.id;
        self.places.push(place);
        id
    }

    pub fn add_object(&mut self, object: StoryObject) -> ObjectId {
        let id = object.id;
        self.objects.push(object);
        id
    }

    pub fn add_generation(&mut self, generation: Generation) -> GenerationId {
        let id = generation.id;
        self.generations.push(generation);
        id
    }

    /// Add an event and index it by its characters and place.
    pub fn add_event(&mut self, event: Event) -> EventId {
        let id = event.id;

        for character in &event.involved_characters {
            self.events_by_character
                .entry(*character)
                .or_default()
                .insert(id);
        }

        if let Some(place) = event.related_place {
            self.events_by_place.entry(place).or_default().insert(id);
        }

        self.events.push(event);
        id
    }

    /// Add a chapter. Chapter numbers are unique within an archive.
    pub fn add_chapter(&mut self, chapter: Chapter) -> StoreResult<()> {
        if self.chapter_by_number.contains_key(&chapter.number) {
            return Err(StoreError::DuplicateChapter(chapter.number));
        }
        self.chapter_by_number.insert(chapter.number, chapter);
        Ok(())
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn chapter_count(&self) -> usize {
        self.chapter_by_number.len()
    }

    /// Narrow the scan with the character and place indices when the filter
    /// has those clauses. Clauses intersect; ids within a clause unite.
    fn candidate_events(&self, filter: &EventFilter<'_>) -> Vec<&Event> {
        let by_character = indexed(&self.events_by_character, &filter.character_ids);
        let by_place = indexed(&self.events_by_place, &filter.place_ids);

        let candidates = match (by_character, by_place) {
            (None, None) => return self.events.iter().collect(),
            (Some(ids), None) | (None, Some(ids)) => ids,
            (Some(characters), Some(places)) => &characters & &places,
        };

        self.events
            .iter()
            .filter(|e| candidates.contains(&e.id))
            .collect()
    }
}

/// Union of the indexed events for `keys`, or `None` when there are no keys.
fn indexed<K: Eq + Hash>(
    index: &HashMap<K, HashSet<EventId>>,
    keys: &HashSet<K>,
) -> Option<HashSet<EventId>> {
    if keys.is_empty() {
        return None;
    }
    Some(
        keys.iter()
            .filter_map(|key| index.get(key))
            .flatten()
            .copied()
            .collect(),
    )
}

impl StoryStore for StoryArchive {
    fn characters(&self) -> StoreResult<Vec<Character>> {
        Ok(self.characters.clone())
    }

    fn places(&self) -> StoreResult<Vec<Place>> {
        Ok(self.places.clone())
    }

    fn objects(&self) -> StoreResult<Vec<StoryObject>> {
        Ok(self.objects.clone())
    }

    fn events(&self) -> StoreResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn find_events(&self, filter: &EventFilter<'_>) -> StoreResult<Vec<Event>> {
        Ok(self
            .candidate_events(filter)
            .into_iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    fn events_by_ids(&self, ids: &[EventId]) -> StoreResult<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|e| ids.contains(&e.id))
            .cloned()
            .collect())
    }

    fn find_chapter_by_number(&self, number: u32) -> StoreResult<Option<Chapter>> {
        Ok(self.chapter_by_number.get(&number).cloned())
    }

    fn populate(&self, event: Event, relations: &[Relation]) -> StoreResult<PopulatedEvent> {
        let characters = if relations.contains(&Relation::Characters) {
            event
                .involved_characters
                .iter()
                .filter_map(|id| self.characters.iter().find(|c| c.id == *id))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        let place = relations
            .contains(&Relation::Place)
            .then_some(event.related_place)
            .flatten()
            .and_then(|id| self.places.iter().find(|p| p.id == id))
            .cloned();

        let generation = relations
            .contains(&Relation::Generation)
            .then_some(event.related_generation)
            .flatten()
            .and_then(|id| self.generations.iter().find(|g| g.id == id))
            .cloned();

        Ok(PopulatedEvent {
            characters,
            place,
            generation,
            ..PopulatedEvent::bare(event)
        })
    }
}
