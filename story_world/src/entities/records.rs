//! Places, objects, generations, events and chapters.

use serde::{Deserialize, Serialize};

use super::{Character, CharacterId, ChapterId, EventId, GenerationId, ObjectId, PlaceId};

/// A place in the story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub description: String,
}

impl Place {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: PlaceId::new(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A notable object, optionally tied to the event, place, character or
/// generation it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryObject {
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub event: Option<EventId>,
    pub place: Option<PlaceId>,
    pub character: Option<CharacterId>,
    pub generation: Option<GenerationId>,
}

impl StoryObject {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            description: description.into(),
            event: None,
            place: None,
            character: None,
            generation: None,
        }
    }

    /// Link the object to the event it appears in.
    pub fn with_event(mut self, event: EventId) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_place(mut self, place: PlaceId) -> Self {
        self.place = Some(place);
        self
    }

    pub fn with_character(mut self, character: CharacterId) -> Self {
        self.character = Some(character);
        self
    }

    pub fn with_generation(mut self, generation: GenerationId) -> Self {
        self.generation = Some(generation);
        self
    }
}

/// A generation of the family saga.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub id: GenerationId,
    pub number: u32,
    pub name: Option<String>,
}

impl Generation {
    pub fn new(number: u32) -> Self {
        Self {
            id: GenerationId::new(),
            number,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Something that happens in the story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,

    /// Short headline of the event.
    pub name: String,

    pub description: Option<String>,

    /// Characters taking part in the event.
    pub involved_characters: Vec<CharacterId>,

    pub related_place: Option<PlaceId>,
    pub related_generation: Option<GenerationId>,
}

impl Event {
    /// Create a new event with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            name: name.into(),
            description: None,
            involved_characters: Vec::new(),
            related_place: None,
            related_generation: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a participating character.
    pub fn with_character(mut self, character: CharacterId) -> Self {
        if !self.involved_characters.contains(&character) {
            self.involved_characters.push(character);
        }
        self
    }

    pub fn with_place(mut self, place: PlaceId) -> Self {
        self.related_place = Some(place);
        self
    }

    pub fn with_generation(mut self, generation: GenerationId) -> Self {
        self.related_generation = Some(generation);
        self
    }

    /// Name and description joined by a space; the description defaults to empty.
    pub fn text(&self) -> String {
        format!("{} {}", self.name, self.description.as_deref().unwrap_or(""))
    }
}

/// A chapter of the book and the events it narrates, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub number: u32,
    pub title: Option<String>,
    pub events: Vec<EventId>,
}

impl Chapter {
    pub fn new(number: u32) -> Self {
        Self {
            id: ChapterId::new(),
            number,
            title: None,
            events: Vec::new(),
        }
    }

    pub fn with_event(mut self, event: EventId) -> Self {
        self.events.push(event);
        self
    }
}

/// Links of an event that a store can resolve into full records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Characters,
    Place,
    Generation,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Relation::Characters, Relation::Place, Relation::Generation];
}

/// An event with its links resolved. Links that were not requested, or that
/// point at records the store no longer has, stay empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulatedEvent {
    pub id: EventId,
    pub name: String,
    pub description: Option<String>,
    pub characters: Vec<Character>,
    pub place: Option<Place>,
    pub generation: Option<Generation>,
}

impl PopulatedEvent {
    /// An event with none of its links resolved.
    pub fn bare(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            characters: Vec::new(),
            place: None,
            generation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let aureliano = CharacterId::new();
        let macondo = PlaceId::new();

        let event = Event::new("Fusilamiento frustrado")
            .with_description("El coronel frente al pelotón")
            .with_character(aureliano)
            .with_character(aureliano)
            .with_place(macondo);

        assert_eq!(event.involved_characters.len(), 1);
        assert_eq!(event.involved_characters, vec![aureliano]);
        assert_eq!(event.related_place, Some(macondo));
    }

    #[test]
    fn test_event_text() {
        let event = Event::new("La peste del insomnio");
        assert_eq!(event.text(), "La peste del insomnio ");

        let event = event.with_description("Nadie duerme");
        assert_eq!(event.text(), "La peste del insomnio Nadie duerme");
    }

    #[test]
    fn test_chapter_keeps_event_order() {
        let first = EventId::new();
        let second = EventId::new();
        let chapter = Chapter::new(1).with_event(first).with_event(second);

        assert_eq!(chapter.events, vec![first, second]);
    }

    #[test]
    fn test_bare_populated_event() {
        let event = Event::new("Llegada de los gitanos").with_description("Traen el imán");
        let populated = PopulatedEvent::bare(event.clone());

        assert_eq!(populated.id, event.id);
        assert_eq!(populated.description.as_deref(), Some("Traen el imán"));
        assert!(populated.characters.is_empty());
        assert!(populated.place.is_none());
    }

    #[test]
    fn test_relation_serialization() {
        let json = serde_json::to_string(&Relation::ALL).unwrap();
        assert_eq!(json, "[\"characters\",\"place\",\"generation\"]");
    }
}
