use std::sync::Arc;

use log::debug;

use crate::data::QuestionBank;
use crate::models::{AppState, NUM_OPTIONS, Track, UnknownTrackError};
use crate::session::{Advance, AnswerOutcome, DEFAULT_SESSION_LENGTH, QuizSession, SessionError};

/// Presentation state for the terminal UI.
///
/// Holds only cursor positions and the screen being shown; scoring lives in the
/// [`QuizSession`], which is created on track selection and dropped on return to the menu.
pub struct App {
    pub state: AppState,
    bank: Arc<QuestionBank>,
    tracks: Vec<Track>,
    selected_track: usize,
    selected_option: usize,
    session: Option<QuizSession>,
    last_outcome: Option<AnswerOutcome>,
    session_length: usize,
    seed: Option<u64>,
}

impl App {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        let tracks = bank.tracks().collect();

        Self {
            state: AppState::TrackSelect,
            bank,
            tracks,
            selected_track: 0,
            selected_option: 0,
            session: None,
            last_outcome: None,
            session_length: DEFAULT_SESSION_LENGTH,
            seed: None,
        }
    }

    /// Number of questions per session.
    pub fn with_session_length(mut self, session_length: usize) -> Self {
        self.session_length = session_length;
        self
    }

    /// Make question draws reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn selected_track(&self) -> usize {
        self.selected_track
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Outcome of the last answer while its popup is open.
    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn select_next_track(&mut self) {
        if !self.tracks.is_empty() {
            self.selected_track = (self.selected_track + 1) % self.tracks.len();
        }
    }

    pub fn select_previous_track(&mut self) {
        if !self.tracks.is_empty() {
            let len = self.tracks.len();
            self.selected_track = (self.selected_track + len - 1) % len;
        }
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    /// Start the track under the cursor.
    ///
    /// Fails with `SessionError::UnknownTrack` when the bank offers no tracks.
    pub fn start_selected_track(&mut self) -> Result<(), SessionError> {
        let track = self
            .tracks
            .get(self.selected_track)
            .copied()
            .ok_or_else(|| UnknownTrackError(format!("#{}", self.selected_track + 1)))?;
        self.start_track(track)
    }

    /// Open a fresh session on `track` and show its first question.
    pub fn start_track(&mut self, track: Track) -> Result<(), SessionError> {
        let bank = Arc::clone(&self.bank);
        let session = match self.seed {
            Some(seed) => QuizSession::seeded(bank, seed),
            None => QuizSession::new(bank),
        };
        let mut session = session.with_max_questions(self.session_length);
        session.start(track)?;

        if let Some(index) = self.tracks.iter().position(|t| *t == track) {
            self.selected_track = index;
        }
        self.session = Some(session);
        self.reset_question_view();
        self.state = AppState::Quiz;
        Ok(())
    }

    /// Answer with the option under the cursor and open the result popup.
    pub fn submit_answer(&mut self) -> Result<(), SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NotStarted)?;
        let outcome = session.answer(self.selected_option)?;
        self.last_outcome = Some(outcome);
        Ok(())
    }

    /// Pick `index` directly and answer with it.
    pub fn answer_option(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= NUM_OPTIONS {
            return Err(SessionError::InvalidOption { index });
        }
        self.selected_option = index;
        self.submit_answer()
    }

    /// Dismiss the popup and move on, switching to the summary when the session is over.
    pub fn next_question(&mut self) -> Result<(), SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NotStarted)?;
        match session.advance()? {
            Advance::Continue => self.state = AppState::Quiz,
            Advance::Complete { score, answered } => {
                debug!("[App] Session finished with {}/{}", score, answered);
                self.state = AppState::Summary;
            }
        }
        self.reset_question_view();
        Ok(())
    }

    /// Play the same track again.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NotStarted)?;
        session.restart()?;
        self.reset_question_view();
        self.state = AppState::Quiz;
        Ok(())
    }

    /// Drop the current session and show the track menu.
    pub fn back_to_menu(&mut self) {
        self.session = None;
        self.reset_question_view();
        self.state = AppState::TrackSelect;
    }

    fn reset_question_view(&mut self) {
        self.selected_option = 0;
        self.last_outcome = None;
    }
}
