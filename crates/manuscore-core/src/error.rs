//! Evaluation and record-store error types.
//!
//! Defined in `manuscore-core` so upper layers can match on typed variants
//! for control flow instead of string-matching messages.

use thiserror::Error;

/// Errors surfaced by the evaluation core and the record store.
#[derive(Debug, Error)]
pub enum Error {
    /// Auto mode was selected with no document type chosen.
    #[error("auto mode requires a document type")]
    MissingDocumentType,

    /// A submission was attempted with zero answered questions.
    #[error("no answers provided")]
    NoAnswersProvided,

    /// An answer outside the 1..=5 scale.
    #[error("invalid answer for {id}: {value} is not in 1..=5")]
    InvalidAnswer { id: String, value: u8 },

    /// An edit or delete referenced a record position that no longer exists.
    #[error("record index {index} is out of range (collection holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A mutating action was attempted without a logged-in user marker.
    #[error("no user session established; run `manuscore login` first")]
    SessionNotEstablished,

    /// Underlying blob storage failure.
    #[error("storage failure: {0}")]
    Storage(#[from] std::io::Error),
}
