use std::collections::VecDeque;

use quiz_core::model::Question;

use super::progress::SessionProgress;
use super::service::QuizSession;

/// Presentation boundary for a quiz session.
///
/// Implementations render a question with its options and capture the user's
/// final selection; the router drives them one question at a time. `present`
/// is the synchronous counterpart of a selection callback: it is invoked once
/// per question and returns the selected option indices.
pub trait Presenter {
    /// Render a question and return the user's selected option indices.
    fn present(&mut self, question: &Question, progress: &SessionProgress) -> Vec<usize>;

    /// Render the results screen. Called exactly once, after the final answer.
    fn present_results(&mut self, session: &QuizSession);
}

/// Presenter replaying a fixed list of selections, for tests and dry runs.
///
/// Records which prompts were presented and how many times results were shown.
/// An exhausted script answers with an empty selection, which the session
/// rejects, so a short script surfaces as a `SessionError::Selection`.
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    selections: VecDeque<Vec<usize>>,
    presented: Vec<String>,
    results_presented: usize,
}

impl ScriptedPresenter {
    #[must_use]
    pub fn new(selections: impl IntoIterator<Item = Vec<usize>>) -> Self {
        Self {
            selections: selections.into_iter().collect(),
            presented: Vec::new(),
            results_presented: 0,
        }
    }

    /// Prompts presented so far, in presentation order.
    #[must_use]
    pub fn presented(&self) -> &[String] {
        &self.presented
    }

    /// Number of times the results screen was presented.
    #[must_use]
    pub fn results_presented(&self) -> usize {
        self.results_presented
    }
}

impl Presenter for ScriptedPresenter {
    fn present(&mut self, question: &Question, _progress: &SessionProgress) -> Vec<usize> {
        self.presented.push(question.prompt().to_string());
        self.selections.pop_front().unwrap_or_default()
    }

    fn present_results(&mut self, _session: &QuizSession) {
        self.results_presented += 1;
    }
}
