use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::error::Error;
use crate::model::question::{Question, QuestionDraft};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised while building or walking a quiz.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("duplicate question prompt: {prompt}")]
    DuplicatePrompt { prompt: String },

    #[error("question is not part of this quiz: {prompt}")]
    UnknownQuestion { prompt: String },
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// An ordered list of validated questions with unique prompts.
///
/// The quiz owns both the question order and each question's options, so the
/// whole session input is one value rather than ambient shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    /// Builds a quiz from already-validated questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DuplicatePrompt` if two questions share a prompt.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.prompt()) {
                return Err(QuizError::DuplicatePrompt {
                    prompt: question.prompt().to_string(),
                });
            }
        }
        Ok(Self { questions })
    }

    /// Validates each draft and builds a quiz from the results.
    ///
    /// # Errors
    ///
    /// Propagates question validation failures and duplicate prompts.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, Error> {
        let questions = drafts
            .into_iter()
            .map(QuestionDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(questions)?)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Looks up a question by its prompt.
    #[must_use]
    pub fn question(&self, prompt: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.prompt() == prompt)
    }

    /// Position of the question with the given prompt in presentation order.
    #[must_use]
    pub fn position(&self, prompt: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.prompt() == prompt)
    }

    /// Returns the question following the one with the given prompt.
    ///
    /// `Ok(None)` means the given question is the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownQuestion` if the prompt is not in the quiz.
    pub fn next_after(&self, prompt: &str) -> Result<Option<&Question>, QuizError> {
        let index = self
            .position(prompt)
            .ok_or_else(|| QuizError::UnknownQuestion {
                prompt: prompt.to_string(),
            })?;
        Ok(self.questions.get(index + 1))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
