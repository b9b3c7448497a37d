use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

//
// ─── ANSWER ────────────────────────────────────────────────────────────────────
//

/// Record of a single answered question.
///
/// Stores which question was answered, when, and the ordered subset of option
/// labels the user finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub prompt: String,
    pub selected: Vec<String>,
    pub answered_at: DateTime<Utc>,
}

impl Answer {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        selected: Vec<String>,
        answered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            selected,
            answered_at,
        }
    }
}

//
// ─── ANSWER SHEET ──────────────────────────────────────────────────────────────
//

/// Per-session answer record, keyed by question prompt.
///
/// Entries are overwritten on re-record and never removed within a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    entries: HashMap<String, Answer>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, overwriting any prior entry for the same prompt.
    ///
    /// Returns the replaced entry, if any.
    pub fn record(&mut self, answer: Answer) -> Option<Answer> {
        self.entries.insert(answer.prompt.clone(), answer)
    }

    #[must_use]
    pub fn get(&self, prompt: &str) -> Option<&Answer> {
        self.entries.get(prompt)
    }

    #[must_use]
    pub fn contains(&self, prompt: &str) -> bool {
        self.entries.contains_key(prompt)
    }

    /// Number of distinct questions answered so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the answered count equals the quiz's question count.
    #[must_use]
    pub fn is_complete(&self, total: usize) -> bool {
        self.entries.len() == total
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
