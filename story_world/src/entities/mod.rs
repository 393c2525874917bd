//! Entity definitions for a narrative archive.

mod character;
mod records;

pub use character::*;
pub use records::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from a specific UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Create a nil/empty ID.
            pub fn nil() -> Self {
                Self(Uuid::nil())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Unique identifier for characters.
    CharacterId
);
record_id!(
    /// Unique identifier for places.
    PlaceId
);
record_id!(
    /// Unique identifier for objects.
    ObjectId
);
record_id!(
    /// Unique identifier for events.
    EventId
);
record_id!(
    /// Unique identifier for chapters.
    ChapterId
);
record_id!(
    /// Unique identifier for generations of a family saga.
    GenerationId
);

/// Kinds of named entities a question can mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Character,
    Place,
    Object,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Character, EntityKind::Place, EntityKind::Object];

    /// Collection name as it appears in story files and logs.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Character => "characters",
            EntityKind::Place => "places",
            EntityKind::Object => "objects",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection())
    }
}
