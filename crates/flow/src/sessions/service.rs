use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{Answer, AnswerSheet, Question, Quiz, QuizError};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory run through one quiz.
///
/// Steps through the questions in order, recording the user's selection for
/// each into an answer sheet keyed by question prompt. Once every question is
/// answered the session is complete and rejects further input.
pub struct QuizSession {
    quiz: Quiz,
    current: usize,
    answers: AnswerSheet,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a new session starting at the first question.
    ///
    /// `started_at` should come from the router's clock to keep time deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the quiz has no questions.
    pub fn new(quiz: Quiz, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if quiz.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            quiz,
            current: 0,
            answers: AnswerSheet::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.quiz.len()
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of questions that have not been answered yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.quiz.len().saturating_sub(self.answers.len())
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// The next unanswered question to present, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions().get(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Resolve selected option indices against the current question and record
    /// the answer, advancing to the next unanswered question.
    ///
    /// Session state is untouched when the selection fails to resolve.
    ///
    /// `answered_at` should come from the router's clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    /// Returns `SessionError::Selection` for indices the current question
    /// cannot resolve.
    pub fn answer_current(
        &mut self,
        selected_indices: &[usize],
        answered_at: DateTime<Utc>,
    ) -> Result<&Answer, SessionError> {
        let (prompt, selected) = {
            let Some(question) = self.current_question() else {
                return Err(SessionError::Completed);
            };
            let selected = question.options().select(selected_indices)?;
            (question.prompt().to_string(), selected)
        };

        self.record_answer(&prompt, selected, answered_at)
    }

    /// Record an answer for the question with the given prompt.
    ///
    /// Overwrites any prior answer for that prompt (last write wins). The
    /// cursor advances past every answered question, so answering the current
    /// question moves the session forward while revising an earlier one does
    /// not. Completion triggers once the answered count reaches the total.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    /// Returns `SessionError::Quiz` if the prompt is not part of the quiz.
    pub fn record_answer(
        &mut self,
        prompt: &str,
        selected: Vec<String>,
        answered_at: DateTime<Utc>,
    ) -> Result<&Answer, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        let question = self
            .quiz
            .question(prompt)
            .ok_or_else(|| QuizError::UnknownQuestion {
                prompt: prompt.to_string(),
            })?;
        let prompt = question.prompt().to_string();

        self.answers
            .record(Answer::new(prompt.clone(), selected, answered_at));

        while let Some(question) = self.quiz.questions().get(self.current) {
            if !self.answers.contains(question.prompt()) {
                break;
            }
            self.current += 1;
        }

        if self.answers.is_complete(self.quiz.len()) {
            self.completed_at = Some(answered_at);
        }

        self.answers.get(&prompt).ok_or(SessionError::Completed)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.quiz.len())
            .field("current", &self.current)
            .field("answered", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionDraft, SelectionError};
    use quiz_core::time::fixed_now;

    fn build_quiz() -> Quiz {
        Quiz::from_drafts(vec![
            QuestionDraft::new("Color?", ["Red", "Blue"]),
            QuestionDraft::new("Size?", ["S", "M"]),
        ])
        .unwrap()
    }

    #[test]
    fn empty_session_returns_error() {
        let quiz = Quiz::new(Vec::new()).unwrap();
        let err = QuizSession::new(quiz, fixed_now()).unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[test]
    fn session_advances_and_completes() {
        let mut session = QuizSession::new(build_quiz(), fixed_now()).unwrap();

        assert!(!session.is_complete());
        assert_eq!(session.current_question().unwrap().prompt(), "Color?");

        let first = session.answer_current(&[0], fixed_now()).unwrap();
        assert_eq!(first.selected, ["Red"]);
        assert!(!session.is_complete());
        assert_eq!(session.current_question().unwrap().prompt(), "Size?");

        let second = session.answer_current(&[1], fixed_now()).unwrap();
        assert_eq!(second.selected, ["M"]);
        assert!(session.is_complete());
        assert_eq!(session.completed_at(), Some(fixed_now()));
        assert!(session.current_question().is_none());
    }

    #[test]
    fn single_question_session_completes_immediately() {
        let quiz = Quiz::from_drafts(vec![QuestionDraft::new("Color?", ["Red", "Blue"])]).unwrap();
        let mut session = QuizSession::new(quiz, fixed_now()).unwrap();

        session.answer_current(&[1], fixed_now()).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.answers().get("Color?").unwrap().selected, ["Blue"]);
    }

    #[test]
    fn answering_a_completed_session_fails() {
        let quiz = Quiz::from_drafts(vec![QuestionDraft::new("Color?", ["Red"])]).unwrap();
        let mut session = QuizSession::new(quiz, fixed_now()).unwrap();
        session.answer_current(&[0], fixed_now()).unwrap();

        let err = session.answer_current(&[0], fixed_now()).unwrap_err();
        assert!(matches!(err, SessionError::Completed));
        // Completion is terminal.
        assert!(session.is_complete());
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn bad_selection_leaves_session_untouched() {
        let mut session = QuizSession::new(build_quiz(), fixed_now()).unwrap();

        let err = session.answer_current(&[5], fixed_now()).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Selection(SelectionError::OptionOutOfRange { index: 5, len: 2 })
        ));

        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.current_question().unwrap().prompt(), "Color?");
        assert!(!session.is_complete());
    }

    #[test]
    fn record_answer_rejects_unknown_question() {
        let mut session = QuizSession::new(build_quiz(), fixed_now()).unwrap();
        let err = session
            .record_answer("Weight?", vec!["Heavy".into()], fixed_now())
            .unwrap_err();
        assert!(matches!(err, SessionError::Quiz(QuizError::UnknownQuestion { .. })));
    }

    #[test]
    fn record_answer_overwrites_without_moving_cursor() {
        let mut session = QuizSession::new(build_quiz(), fixed_now()).unwrap();
        session.answer_current(&[0], fixed_now()).unwrap();

        // Revise the first answer while the second question is current.
        session
            .record_answer("Color?", vec!["Blue".into()], fixed_now())
            .unwrap();

        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.answers().get("Color?").unwrap().selected, ["Blue"]);
        assert_eq!(session.current_question().unwrap().prompt(), "Size?");
        assert!(!session.is_complete());
    }

    #[test]
    fn cursor_skips_questions_answered_out_of_order() {
        let quiz = Quiz::from_drafts(vec![
            QuestionDraft::new("Color?", ["Red", "Blue"]),
            QuestionDraft::new("Size?", ["S", "M"]),
            QuestionDraft::new("Shape?", ["Round", "Square"]),
        ])
        .unwrap();
        let mut session = QuizSession::new(quiz, fixed_now()).unwrap();

        session
            .record_answer("Size?", vec!["S".into()], fixed_now())
            .unwrap();
        assert_eq!(session.current_question().unwrap().prompt(), "Color?");

        // Answering the current question jumps past the already-answered one.
        session.answer_current(&[0], fixed_now()).unwrap();
        assert_eq!(session.current_question().unwrap().prompt(), "Shape?");

        session.answer_current(&[1], fixed_now()).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.answered_count(), 3);
    }

    #[test]
    fn progress_reflects_each_step() {
        let mut session = QuizSession::new(build_quiz(), fixed_now()).unwrap();
        assert_eq!(
            session.progress(),
            SessionProgress {
                total: 2,
                answered: 0,
                remaining: 2,
                is_complete: false,
            }
        );

        session.answer_current(&[0], fixed_now()).unwrap();
        assert_eq!(
            session.progress(),
            SessionProgress {
                total: 2,
                answered: 1,
                remaining: 1,
                is_complete: false,
            }
        );

        session.answer_current(&[0], fixed_now()).unwrap();
        assert_eq!(
            session.progress(),
            SessionProgress {
                total: 2,
                answered: 2,
                remaining: 0,
                is_complete: true,
            }
        );
    }
}
