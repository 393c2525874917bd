//! Query outcomes and their wire shape.

use serde::Serialize;
use story_world::PopulatedEvent;

/// The result of planning and running one question.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The question named a chapter explicitly. A chapter the story does not
    /// have yields no events.
    Chapter {
        number: u32,
        events: Vec<PopulatedEvent>,
    },

    /// The question closely resembles a single event.
    Similar { event: PopulatedEvent },

    /// An existence question and every event mentioning its term.
    Existence {
        term: String,
        events: Vec<PopulatedEvent>,
    },

    /// Events found through the combined filter or its fallbacks.
    All { events: Vec<PopulatedEvent> },
}

impl QueryOutcome {
    pub fn events(&self) -> &[PopulatedEvent] {
        match self {
            QueryOutcome::Chapter { events, .. }
            | QueryOutcome::Existence { events, .. }
            | QueryOutcome::All { events } => events,
            QueryOutcome::Similar { event } => std::slice::from_ref(event),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events().is_empty()
    }

    pub fn tag(&self) -> ChapterTag {
        match self {
            QueryOutcome::Chapter { number, .. } => ChapterTag::Number(*number),
            QueryOutcome::Similar { .. } => ChapterTag::Label("similar"),
            QueryOutcome::Existence { .. } => ChapterTag::Label("existencia"),
            QueryOutcome::All { .. } => ChapterTag::Label("todos"),
        }
    }

    /// Borrow the outcome in its serializable response shape.
    pub fn to_response(&self) -> QueryResponse<'_> {
        QueryResponse {
            chapter: self.tag(),
            term: match self {
                QueryOutcome::Existence { term, .. } => Some(term.as_str()),
                _ => None,
            },
            events: self.events(),
        }
    }
}

/// The `chapter` field of a response: a chapter number or a mode label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChapterTag {
    Number(u32),
    Label(&'static str),
}

#[derive(Debug, Serialize)]
pub struct QueryResponse<'a> {
    pub chapter: ChapterTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<&'a str>,
    pub events: &'a [PopulatedEvent],
}
