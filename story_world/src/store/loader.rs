//! TOML story files.
//!
//! Records in a story file refer to each other by name (or by number for
//! generations), so a file can be written by hand:
//!
//! ```toml
//! [[characters]]
//! name = "Úrsula Iguarán"
//! generation = 1
//!
//! [[events]]
//! name = "Fundación de Macondo"
//! characters = ["Úrsula Iguarán"]
//! place = "Macondo"
//!
//! [[chapters]]
//! number = 1
//! events = ["Fundación de Macondo"]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::{StoreError, StoreResult, StoryArchive};
use crate::entities::{
    Chapter, Character, CharacterId, Event, EventId, Gender, Generation, GenerationId, Place,
    PlaceId, StoryObject,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoryFile {
    #[serde(default)]
    generations: Vec<GenerationEntry>,
    #[serde(default)]
    characters: Vec<CharacterEntry>,
    #[serde(default)]
    places: Vec<PlaceEntry>,
    #[serde(default)]
    events: Vec<EventEntry>,
    #[serde(default)]
    objects: Vec<ObjectEntry>,
    #[serde(default)]
    chapters: Vec<ChapterEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GenerationEntry {
    number: u32,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CharacterEntry {
    name: String,
    generation: Option<u32>,
    gender: Option<Gender>,
    destiny: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaceEntry {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EventEntry {
    name: String,
    description: Option<String>,
    #[serde(default)]
    characters: Vec<String>,
    place: Option<String>,
    generation: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ObjectEntry {
    name: String,
    #[serde(default)]
    description: String,
    event: Option<String>,
    place: Option<String>,
    character: Option<String>,
    generation: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChapterEntry {
    number: u32,
    title: Option<String>,
    #[serde(default)]
    events: Vec<String>,
}

/// Name lookups built while loading, in dependency order.
#[derive(Default)]
struct References {
    generations: HashMap<u32, GenerationId>,
    characters: HashMap<String, CharacterId>,
    places: HashMap<String, PlaceId>,
    events: HashMap<String, EventId>,
}

impl References {
    fn generation(&self, number: Option<u32>) -> StoreResult<Option<GenerationId>> {
        number
            .map(|n| {
                self.generations
                    .get(&n)
                    .copied()
                    .ok_or_else(|| unknown("generation", n.to_string()))
            })
            .transpose()
    }

    fn character(&self, name: &str) -> StoreResult<CharacterId> {
        lookup(&self.characters, "character", name)
    }

    fn place(&self, name: &str) -> StoreResult<PlaceId> {
        lookup(&self.places, "place", name)
    }

    fn event(&self, name: &str) -> StoreResult<EventId> {
        lookup(&self.events, "event", name)
    }
}

fn register<T>(
    map: &mut HashMap<String, T>,
    kind: &'static str,
    name: String,
    id: T,
) -> StoreResult<()> {
    if map.contains_key(&name) {
        return Err(StoreError::DuplicateName { kind, name });
    }
    map.insert(name, id);
    Ok(())
}

fn lookup<T: Copy>(map: &HashMap<String, T>, kind: &'static str, name: &str) -> StoreResult<T> {
    map.get(name).copied().ok_or_else(|| unknown(kind, name))
}

fn unknown(kind: &'static str, name: impl Into<String>) -> StoreError {
    StoreError::UnknownReference {
        kind,
        name: name.into(),
    }
}

impl StoryArchive {
    /// Build an archive from the contents of a TOML story file.
    pub fn from_toml_str(source: &str) -> StoreResult<Self> {
        let file: StoryFile = toml::from_str(source)?;
        let mut archive = StoryArchive::new();
        let mut refs = References::default();

        for entry in file.generations {
            let mut generation = Generation::new(entry.number);
            generation.name = entry.name;
            refs.generations
                .insert(entry.number, archive.add_generation(generation));
        }

        for entry in file.characters {
            let mut character = Character::new(entry.name.as_str());
            character.generation = refs.generation(entry.generation)?;
            character.gender = entry.gender;
            character.destiny = entry.destiny;
            let id = archive.add_character(character);
            register(&mut refs.characters, "character", entry.name, id)?;
        }

        for entry in file.places {
            let id = archive.add_place(Place::new(entry.name.as_str(), entry.description));
            register(&mut refs.places, "place", entry.name, id)?;
        }

        for entry in file.events {
            let mut event = Event::new(entry.name.as_str());
            event.description = entry.description;
            for name in &entry.characters {
                event = event.with_character(refs.character(name)?);
            }
            event.related_place = entry.place.as_deref().map(|p| refs.place(p)).transpose()?;
            event.related_generation = refs.generation(entry.generation)?;
            let id = archive.add_event(event);
            register(&mut refs.events, "event", entry.name, id)?;
        }

        for entry in file.objects {
            let mut object = StoryObject::new(entry.name, entry.description);
            object.event = entry.event.as_deref().map(|e| refs.event(e)).transpose()?;
            object.place = entry.place.as_deref().map(|p| refs.place(p)).transpose()?;
            object.character = entry
                .character
                .as_deref()
                .map(|c| refs.character(c))
                .transpose()?;
            object.generation = refs.generation(entry.generation)?;
            archive.add_object(object);
        }

        for entry in file.chapters {
            let mut chapter = Chapter::new(entry.number);
            chapter.title = entry.title;
            for name in &entry.events {
                chapter = chapter.with_event(refs.event(name)?);
            }
            archive.add_chapter(chapter)?;
        }

        tracing::info!(
            events = archive.event_count(),
            chapters = archive.chapter_count(),
            "story archive loaded"
        );

        Ok(archive)
    }

    /// Read and build an archive from a TOML story file on disk.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Relation;
    use crate::store::StoryStore;

    const STORY: &str = r#"
[[generations]]
number = 1
name = "Fundadores"

[[characters]]
name = "José Arcadio Buendía"
generation = 1
gender = "male"

[[characters]]
name = "Úrsula Iguarán"
generation = 1
gender = "female"
destiny = "Muere centenaria"

[[places]]
name = "Macondo"
description = "Aldea de veinte casas de barro"

[[events]]
name = "Fundación de Macondo"
description = "Los fundadores cruzan la sierra"
characters = ["José Arcadio Buendía", "Úrsula Iguarán"]
place = "Macondo"
generation = 1

[[objects]]
name = "El imán"
description = "Lingotes metálicos de Melquíades"
event = "Fundación de Macondo"

[[chapters]]
number = 1
title = "Los fundadores"
events = ["Fundación de Macondo"]
"#;

    #[test]
    fn test_load_story() {
        let archive = StoryArchive::from_toml_str(STORY).unwrap();

        assert_eq!(archive.event_count(), 1);
        assert_eq!(archive.chapter_count(), 1);

        let chapter = archive.find_chapter_by_number(1).unwrap().unwrap();
        assert_eq!(chapter.title.as_deref(), Some("Los fundadores"));

        let event = archive.events_by_ids(&chapter.events).unwrap().remove(0);
        let populated = archive.populate(event, &Relation::ALL).unwrap();
        assert_eq!(populated.characters.len(), 2);
        assert_eq!(populated.place.unwrap().name, "Macondo");
        assert_eq!(populated.generation.unwrap().name.as_deref(), Some("Fundadores"));
    }

    #[test]
    fn test_object_links_to_event() {
        let archive = StoryArchive::from_toml_str(STORY).unwrap();
        let objects = archive.objects().unwrap();
        let event = archive.events().unwrap().remove(0);

        assert_eq!(objects[0].event, Some(event.id));
    }

    #[test]
    fn test_unknown_reference() {
        let story = r#"
[[events]]
name = "La peste"
characters = ["Nadie"]
"#;
        let result = StoryArchive::from_toml_str(story);
        assert!(matches!(
            result,
            Err(StoreError::UnknownReference { kind: "character", ref name }) if name == "Nadie"
        ));
    }

    #[test]
    fn test_duplicate_chapter_in_file() {
        let story = r#"
[[chapters]]
number = 2

[[chapters]]
number = 2
"#;
        let result = StoryArchive::from_toml_str(story);
        assert!(matches!(result, Err(StoreError::DuplicateChapter(2))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let characters = r#"
[[characters]]
name = "Aureliano"

[[characters]]
name = "Aureliano"
"#;
        assert!(matches!(
            StoryArchive::from_toml_str(characters),
            Err(StoreError::DuplicateName { kind: "character", ref name }) if name == "Aureliano"
        ));

        let places = "[[places]]\nname = \"Macondo\"\n\n[[places]]\nname = \"Macondo\"\n";
        assert!(matches!(
            StoryArchive::from_toml_str(places),
            Err(StoreError::DuplicateName { kind: "place", .. })
        ));

        let events = "[[events]]\nname = \"La peste\"\n\n[[events]]\nname = \"La peste\"\n";
        assert!(matches!(
            StoryArchive::from_toml_str(events),
            Err(StoreError::DuplicateName { kind: "event", .. })
        ));
    }

    #[test]
    fn test_malformed_file() {
        let result = StoryArchive::from_toml_str("[[events]]\nnombre = 3\n");
        assert!(matches!(result, Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = StoryArchive::load("/nonexistent/story.toml");
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }
}
