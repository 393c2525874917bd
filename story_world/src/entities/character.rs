//! Character definitions.

use serde::{Deserialize, Serialize};

use super::{CharacterId, GenerationId};

/// A character of the story.
///
/// Stored names may carry a trailing parenthetical alias, e.g.
/// `"José Arcadio (el Grande)"`; the name is kept verbatim here and split
/// by whoever needs the alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,

    /// Generation of the family the character belongs to.
    pub generation: Option<GenerationId>,
    pub gender: Option<Gender>,

    /// Free-text note on how the character's story ends.
    pub destiny: Option<String>,
}

impl Character {
    /// Create a new character with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            generation: None,
            gender: None,
            destiny: None,
        }
    }

    /// Set the generation.
    pub fn with_generation(mut self, generation: GenerationId) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Set the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the destiny note.
    pub fn with_destiny(mut self, destiny: impl Into<String>) -> Self {
        self.destiny = Some(destiny.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}
