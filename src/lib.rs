//! # code-master
//!
//! A terminal quiz for drilling programming-language basics, plus a small emoji reference
//! table.
//!
//! The quiz logic lives in [`QuizSession`], which the terminal UI drives through
//! `start`, `answer` and `advance`. Sessions can be used without the UI:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use code_master::{QuestionBank, QuizError, QuizSession, Track};
//!
//! fn main() -> Result<(), QuizError> {
//!     let bank = Arc::new(QuestionBank::bundled()?);
//!     let mut session = QuizSession::new(bank);
//!
//!     let question = session.start(Track::Python)?;
//!     let correct = question.correct_index();
//!     let outcome = session.answer(correct)?;
//!     assert!(outcome.correct);
//!     session.advance()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
pub mod emoji;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;
use thiserror::Error;

pub use app::App;
pub use data::{
    LoadError, QuestionBank, load_bundled_questions, load_questions_from_json, parse_questions,
};
pub use models::{
    AppState, DEFAULT_EXPLANATION, NUM_OPTIONS, Question, QuestionError, Track, UnknownTrackError,
};
pub use session::{
    Advance, AnswerOutcome, DEFAULT_SESSION_LENGTH, Grade, Phase, QuizSession, SessionError,
};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("quiz session error: {0}")]
    Session(#[from] SessionError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// The interactive quiz, ready to run in the terminal.
pub struct CodeMaster {
    app: App,
    initial_track: Option<Track>,
}

impl CodeMaster {
    /// Create a quiz over `bank`.
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            app: App::new(Arc::new(bank)),
            initial_track: None,
        }
    }

    /// Create a quiz over the bundled question table.
    pub fn bundled() -> Result<Self, QuizError> {
        Ok(Self::new(QuestionBank::bundled()?))
    }

    /// Load a quiz from a JSON question file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use code_master::CodeMaster;
    ///
    /// let quiz = CodeMaster::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let bank = load_questions_from_json(path)?;
        info!("Loaded {} questions", bank.len());
        Ok(Self::new(bank))
    }

    /// Skip the track menu and start on `track`.
    pub fn with_track(mut self, track: Option<Track>) -> Self {
        self.initial_track = track;
        self
    }

    /// Number of questions per session.
    pub fn with_session_length(mut self, session_length: usize) -> Self {
        self.app = self.app.with_session_length(session_length);
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal and returns when the user quits. A session error aborts the
    /// loop; the terminal is restored before it is returned.
    pub fn run(mut self) -> Result<(), QuizError> {
        if let Some(track) = self.initial_track {
            self.app.start_track(track)?;
        }

        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        finish(result, terminal::restore())
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

/// Prefer the event loop's error over a failure to restore the terminal.
fn finish(result: Result<(), QuizError>, restored: io::Result<()>) -> Result<(), QuizError> {
    result?;
    restored?;
    Ok(())
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
pub fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, SessionError> {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Ok(true);
    }

    match app.state {
        AppState::TrackSelect => handle_track_select_input(app, key),
        AppState::Quiz if app.last_outcome().is_some() => handle_popup_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Summary => handle_summary_input(app, key),
    }
}

fn handle_track_select_input(app: &mut App, key: KeyCode) -> Result<bool, SessionError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_track(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_track(),
        KeyCode::Enter | KeyCode::Char(' ') => app.start_selected_track()?,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(track) = app.tracks().get(index).copied() {
                app.start_track(track)?;
            }
        }
        KeyCode::Esc => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Result<bool, SessionError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer()?,
        KeyCode::Char(c @ '1'..='4') => app.answer_option(c as usize - '1' as usize)?,
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc => app.back_to_menu(),
        _ => {}
    }
    Ok(false)
}

fn handle_popup_input(app: &mut App, key: KeyCode) -> Result<bool, SessionError> {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => app.next_question()?,
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc => app.back_to_menu(),
        _ => {}
    }
    Ok(false)
}

fn handle_summary_input(app: &mut App, key: KeyCode) -> Result<bool, SessionError> {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart()?,
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Char('m') | KeyCode::Esc => {
            app.back_to_menu()
        }
        _ => {}
    }
    Ok(false)
}
