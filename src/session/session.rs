//! One bounded play-through of a single track.

use std::sync::Arc;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::data::QuestionBank;
use crate::models::{NUM_OPTIONS, Question, Track, UnknownTrackError};

use super::Grade;

/// Number of questions in a session unless configured otherwise.
pub const DEFAULT_SESSION_LENGTH: usize = 10;

/// Caller-ordering violations. None of these are recoverable by retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    UnknownTrack(#[from] UnknownTrackError),
    #[error("session has not been started")]
    NotStarted,
    #[error("session is complete")]
    Complete,
    #[error("session is not complete yet")]
    NotComplete,
    #[error("option {index} is out of range")]
    InvalidOption { index: usize },
    #[error("current question was already answered")]
    AlreadyAnswered,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Complete,
}

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub selected_index: usize,
    pub correct_index: usize,
    /// Never empty; falls back to the default placeholder.
    pub explanation: String,
}

/// Returned by [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A new question was drawn.
    Continue,
    /// No more questions; carries the final tally.
    Complete { score: usize, answered: usize },
}

/// Drives one play-through: draws questions, checks answers, keeps the score.
///
/// Draws are independent uniform picks from the track's questions, so a question can come
/// up more than once in a session.
pub struct QuizSession<R = StdRng> {
    bank: Arc<QuestionBank>,
    rng: R,
    track: Option<Track>,
    current: Option<usize>,
    current_answered: bool,
    score: usize,
    answered: usize,
    max_questions: usize,
    history: Vec<bool>,
    phase: Phase,
}

impl QuizSession<StdRng> {
    /// Create a session drawing with an OS-seeded generator.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self::with_rng(bank, StdRng::from_os_rng())
    }

    /// Create a session with a reproducible draw order.
    #[must_use]
    pub fn seeded(bank: Arc<QuestionBank>, seed: u64) -> Self {
        Self::with_rng(bank, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizSession<R> {
    #[must_use]
    pub fn with_rng(bank: Arc<QuestionBank>, rng: R) -> Self {
        Self {
            bank,
            rng,
            track: None,
            current: None,
            current_answered: false,
            score: 0,
            answered: 0,
            max_questions: DEFAULT_SESSION_LENGTH,
            history: Vec::with_capacity(DEFAULT_SESSION_LENGTH),
            phase: Phase::NotStarted,
        }
    }

    /// Set the session length. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_questions(mut self, max_questions: usize) -> Self {
        self.max_questions = max_questions.max(1);
        self
    }

    /// Begin (or restart) a play-through on `track` and draw the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownTrack` if the bank has no questions for `track`. The
    /// session is left untouched in that case.
    pub fn start(&mut self, track: Track) -> Result<&Question, SessionError> {
        self.bank.questions_for(track)?;

        self.track = Some(track);
        self.score = 0;
        self.answered = 0;
        self.history.clear();
        self.phase = Phase::InProgress;
        info!(
            "[Session] Started {} ({} questions)",
            track.id(),
            self.max_questions
        );

        self.draw_question()
    }

    /// Start again on the current track.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` if no track was ever selected.
    pub fn restart(&mut self) -> Result<&Question, SessionError> {
        let track = self.track.ok_or(SessionError::NotStarted)?;
        self.start(track)
    }

    /// Pick the next question uniformly at random, independent of earlier draws.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` before [`QuizSession::start`], and
    /// `SessionError::Complete` once `max_questions` answers are recorded.
    pub fn draw_question(&mut self) -> Result<&Question, SessionError> {
        let track = self.track.ok_or(SessionError::NotStarted)?;
        if self.is_complete() {
            return Err(SessionError::Complete);
        }
        let questions = self.bank.questions_for(track)?;

        let index = self.rng.random_range(0..questions.len());
        self.current = Some(index);
        self.current_answered = false;
        debug!("[Session] Drew question {} of {}", index, track.id());

        Ok(&questions[index])
    }

    /// Check `selected_index` against the current question and record the result.
    ///
    /// # Errors
    ///
    /// - `SessionError::NotStarted` before [`QuizSession::start`].
    /// - `SessionError::Complete` once `max_questions` answers are recorded.
    /// - `SessionError::InvalidOption` if `selected_index` is not in `0..4`.
    /// - `SessionError::AlreadyAnswered` if the current question was answered and
    ///   [`QuizSession::advance`] has not been called since.
    pub fn answer(&mut self, selected_index: usize) -> Result<AnswerOutcome, SessionError> {
        if self.track.is_none() {
            return Err(SessionError::NotStarted);
        }
        if self.is_complete() {
            return Err(SessionError::Complete);
        }
        if selected_index >= NUM_OPTIONS {
            return Err(SessionError::InvalidOption {
                index: selected_index,
            });
        }
        if self.current_answered {
            return Err(SessionError::AlreadyAnswered);
        }

        let question = self.current_question().ok_or(SessionError::NotStarted)?;
        let outcome = AnswerOutcome {
            correct: question.is_correct(selected_index),
            selected_index,
            correct_index: question.correct_index(),
            explanation: question.explanation_or_default().to_string(),
        };

        self.history.push(outcome.correct);
        self.answered += 1;
        if outcome.correct {
            self.score += 1;
        }
        self.current_answered = true;
        debug!(
            "[Session] Answered {} ({}): score {}/{}",
            selected_index,
            if outcome.correct { "correct" } else { "incorrect" },
            self.score,
            self.answered
        );

        Ok(outcome)
    }

    /// Move past the current question.
    ///
    /// Draws a new question while answers remain; otherwise marks the session complete and
    /// reports the final tally without drawing.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` before [`QuizSession::start`].
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        if self.track.is_none() {
            return Err(SessionError::NotStarted);
        }

        if self.is_complete() {
            if self.phase != Phase::Complete {
                info!(
                    "[Session] Complete: {}/{} ({})",
                    self.score,
                    self.answered,
                    Grade::from_score(self.score, self.answered)
                );
            }
            self.phase = Phase::Complete;
            self.current = None;
            return Ok(Advance::Complete {
                score: self.score,
                answered: self.answered,
            });
        }

        self.draw_question()?;
        Ok(Advance::Continue)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered >= self.max_questions
    }

    /// Tier for the finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while answers remain.
    pub fn final_grade(&self) -> Result<Grade, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }
        Ok(Grade::from_score(self.score, self.answered))
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        let questions = self.bank.questions_for(self.track?).ok()?;
        questions.get(self.current?)
    }

    /// Whether the current question has been answered and is waiting for `advance`.
    #[must_use]
    pub fn is_current_answered(&self) -> bool {
        self.current_answered
    }

    #[must_use]
    pub fn track(&self) -> Option<Track> {
        self.track
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered
    }

    #[must_use]
    pub fn max_questions(&self) -> usize {
        self.max_questions
    }

    /// One entry per answered question, `true` for correct.
    #[must_use]
    pub fn history(&self) -> &[bool] {
        &self.history
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }
}
