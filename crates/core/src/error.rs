use thiserror::Error;

use crate::model::QuestionError;
use crate::model::QuizError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
