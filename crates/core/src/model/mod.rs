mod answer;
mod question;
mod quiz;

pub use answer::{Answer, AnswerSheet};
pub use question::{OptionSet, Question, QuestionDraft, QuestionError, SelectionError};
pub use quiz::{Quiz, QuizError};
