mod boundary;
mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use boundary::{Presenter, ScriptedPresenter};
pub use progress::SessionProgress;
pub use service::QuizSession;
pub use workflow::{QuizRouter, SessionAnswerResult};
