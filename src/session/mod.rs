//! Quiz session state machine.
//!
//! A session moves `NotStarted -> InProgress -> Complete`. While in progress the caller pairs
//! [`QuizSession::answer`] with [`QuizSession::advance`] until the configured number of
//! questions has been answered. `Complete` is terminal until [`QuizSession::start`] is called
//! again.

mod grade;
#[allow(clippy::module_inception)]
mod session;

pub use grade::Grade;
pub use session::{
    Advance, AnswerOutcome, DEFAULT_SESSION_LENGTH, Phase, QuizSession, SessionError,
};
