mod question;
mod track;

pub use question::{DEFAULT_EXPLANATION, NUM_OPTIONS, Question, QuestionError};
pub use track::{Track, UnknownTrackError};

/// Which screen the terminal UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    TrackSelect,
    Quiz,
    Summary,
}
