//! Shared error types for the flow crate.

use thiserror::Error;

use quiz_core::model::{QuizError, SelectionError};

/// Errors emitted by quiz sessions and the router.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}
