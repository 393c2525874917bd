//! # Story World
//!
//! The archive side of the inquiry system: every record a narrative is made of
//! (characters, places, objects, generations, events and chapters) and the
//! store seam the question pipeline reads through. This crate holds no
//! question-answering logic.
//!
//! ## Core Components
//!
//! - **entities**: Typed identifiers and the narrative records themselves
//! - **store**: The `StoryStore` trait, event filters, and the in-memory `StoryArchive`

pub mod entities;
pub mod store;

pub use entities::*;
pub use store::*;
