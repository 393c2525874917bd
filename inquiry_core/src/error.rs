//! Error taxonomy of the question pipeline.
//!
//! Empty results are not errors: a question that mentions nothing known, or
//! whose fallbacks all come back empty, yields an empty `QueryOutcome::All`.

use story_world::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// The question text is missing or blank.
    #[error("question text is missing")]
    BadInput,

    /// The question refers to a chapter the story does not have.
    #[error("chapter {0} not found")]
    ChapterNotFound(u32),

    /// A read against the story store failed.
    #[error("internal error: {0}")]
    StoreUnavailable(#[from] StoreError),
}

pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(QueryError::BadInput.to_string(), "question text is missing");
        assert_eq!(QueryError::ChapterNotFound(7).to_string(), "chapter 7 not found");

        let err = QueryError::from(StoreError::Unavailable("connection reset".into()));
        assert_eq!(
            err.to_string(),
            "internal error: story store unavailable: connection reset"
        );
    }
}
