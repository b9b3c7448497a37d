use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

/// Errors raised while validating a question draft.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must offer at least one option")]
    NoOptions,

    #[error("option label at index {index} is blank")]
    BlankOption { index: usize },
}

/// Errors raised while resolving a user's selected option indices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection must contain at least one option")]
    EmptySelection,

    #[error("selected option index {index} is out of range for {len} options")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("option index {index} selected more than once")]
    DuplicateIndex { index: usize },
}

//
// ─── OPTION SET ────────────────────────────────────────────────────────────────
//

/// Ordered, non-empty list of option labels presented with a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    labels: Vec<String>,
}

impl OptionSet {
    /// Builds an option set from the given labels, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoOptions` if no labels are given.
    /// Returns `QuestionError::BlankOption` for any label that is blank.
    pub fn new<I, S>(labels: I) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        for (index, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(QuestionError::BlankOption { index });
            }
        }
        Ok(Self { labels })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of options in this set. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false: option sets are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Resolves selected option indices to their labels, in selection order.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::EmptySelection` if no indices are given.
    /// Returns `SelectionError::OptionOutOfRange` for an index past the last option.
    /// Returns `SelectionError::DuplicateIndex` if an index appears twice.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<String>, SelectionError> {
        if indices.is_empty() {
            return Err(SelectionError::EmptySelection);
        }

        let mut seen = vec![false; self.labels.len()];
        let mut selected = Vec::with_capacity(indices.len());
        for &index in indices {
            let label = self
                .labels
                .get(index)
                .ok_or(SelectionError::OptionOutOfRange {
                    index,
                    len: self.labels.len(),
                })?;
            if seen[index] {
                return Err(SelectionError::DuplicateIndex { index });
            }
            seen[index] = true;
            selected.push(label.clone());
        }
        Ok(selected)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question input, as provided by whoever assembles a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
}

impl QuestionDraft {
    pub fn new<S, I, L>(prompt: S, options: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Validates the draft into a presentable question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank.
    /// Propagates option set validation failures.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        let options = OptionSet::new(self.options)?;
        Ok(Question {
            prompt: self.prompt,
            options,
        })
    }
}

/// A validated question: a prompt and the options offered for it.
///
/// The prompt doubles as the question's identity within a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: OptionSet,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
