use quiz_core::Clock;
use quiz_core::model::{Answer, Quiz};

use super::boundary::Presenter;
use super::progress::SessionProgress;
use super::service::QuizSession;
use crate::error::SessionError;

/// Result of answering a single question in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAnswerResult {
    pub answer: Answer,
    pub is_complete: bool,
    pub progress: SessionProgress,
}

/// Orchestrates session start and question-by-question answering.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizRouter {
    clock: Clock,
}

impl QuizRouter {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Start a new session at the first question of the quiz.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the quiz has no questions.
    pub fn start(&self, quiz: Quiz) -> Result<QuizSession, SessionError> {
        QuizSession::new(quiz, self.clock.now())
    }

    /// Answer the current question and report completion state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the session is complete or the selection
    /// does not resolve against the current question.
    pub fn answer_current(
        &self,
        session: &mut QuizSession,
        selected_indices: &[usize],
    ) -> Result<SessionAnswerResult, SessionError> {
        let answer = session
            .answer_current(selected_indices, self.clock.now())?
            .clone();

        Ok(SessionAnswerResult {
            answer,
            is_complete: session.is_complete(),
            progress: session.progress(),
        })
    }

    /// Drive a presenter through every question, then present results once.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` for a quiz without questions and
    /// propagates selection failures reported by the presenter.
    pub fn run<P: Presenter>(
        &self,
        quiz: Quiz,
        presenter: &mut P,
    ) -> Result<QuizSession, SessionError> {
        let mut session = self.start(quiz)?;

        while let Some(question) = session.current_question().cloned() {
            let progress = session.progress();
            let selection = presenter.present(&question, &progress);
            self.answer_current(&mut session, &selection)?;
        }

        presenter.present_results(&session);
        Ok(session)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::super::boundary::ScriptedPresenter;
    use super::*;
    use quiz_core::model::QuestionDraft;
    use quiz_core::time::fixed_clock;

    fn build_quiz() -> Quiz {
        Quiz::from_drafts(vec![
            QuestionDraft::new("Color?", ["Red", "Blue"]),
            QuestionDraft::new("Size?", ["S", "M"]),
        ])
        .unwrap()
    }

    #[test]
    fn answer_current_reports_completion() {
        let router = QuizRouter::new(fixed_clock());
        let mut session = router.start(build_quiz()).unwrap();

        let step = router.answer_current(&mut session, &[0]).unwrap();
        assert_eq!(step.answer.selected, ["Red"]);
        assert!(!step.is_complete);
        assert_eq!(step.progress.remaining, 1);

        let step = router.answer_current(&mut session, &[1]).unwrap();
        assert_eq!(step.answer.selected, ["M"]);
        assert!(step.is_complete);
        assert_eq!(step.progress.remaining, 0);
    }

    #[test]
    fn run_presents_each_question_once_then_results() {
        let router = QuizRouter::new(fixed_clock());
        let mut presenter = ScriptedPresenter::new([vec![0], vec![1]]);

        let session = router.run(build_quiz(), &mut presenter).unwrap();

        assert_eq!(presenter.presented(), ["Color?", "Size?"]);
        assert_eq!(presenter.results_presented(), 1);
        assert!(session.is_complete());
    }

    #[test]
    fn run_rejects_empty_quiz() {
        let router = QuizRouter::new(fixed_clock());
        let mut presenter = ScriptedPresenter::default();

        let err = router
            .run(Quiz::new(Vec::new()).unwrap(), &mut presenter)
            .unwrap_err();
        assert!(matches!(err, SessionError::Empty));
        assert_eq!(presenter.results_presented(), 0);
    }
}
