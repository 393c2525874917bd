//! # Inquiry Core
//!
//! Turns a free-text question about a story into a structured query plan and
//! runs it against a [`story_world::StoryStore`].
//!
//! ## Core Components
//!
//! - **text**: Case, accent and plural folding
//! - **intents**: The narrative intent taxonomy and verb detection
//! - **matching**: Loose entity mention detection and strict record resolution
//! - **existence**: "Was there any X?" question templates
//! - **ranking**: Token-overlap similarity between questions and events
//! - **planner**: The analysis and the prioritized query cascade
//!
//! ## Pipeline
//!
//! 1. An explicit `capítulo N` short-circuits to that chapter's events
//! 2. Otherwise the question is analysed: existence term, verb intents,
//!    mentioned characters/places/objects, and a fuzzy best event
//! 3. The planner combines the signals into one event filter and falls back
//!    to looser queries when the combined filter finds nothing

pub mod error;
pub mod existence;
pub mod intents;
pub mod matching;
pub mod planner;
pub mod ranking;
pub mod text;

pub use error::*;
pub use existence::*;
pub use intents::*;
pub use matching::*;
pub use planner::*;
pub use ranking::*;
pub use text::*;
