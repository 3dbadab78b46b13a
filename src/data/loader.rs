use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{NUM_OPTIONS, Question, QuestionError, Track, UnknownTrackError};
use crate::session::DEFAULT_SESSION_LENGTH;

use super::QuestionBank;

const BUNDLED_QUESTIONS: &str = include_str!("../../assets/questions.json");
const BUNDLED_ORIGIN: &str = "bundled questions";

/// Errors raised while reading question data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{origin} does not contain any tracks")]
    NoTracks { origin: String },
    #[error(transparent)]
    UnknownTrack(#[from] UnknownTrackError),
    #[error("track {0} has no questions")]
    EmptyTrack(Track),
    #[error("track {0} appears more than once")]
    DuplicateTrack(Track),
    #[error("question {position} of track {track} is invalid: {source}")]
    InvalidQuestion {
        track: Track,
        position: usize,
        #[source]
        source: QuestionError,
    },
}

#[derive(Deserialize)]
struct QuestionRecord {
    text: String,
    options: [String; NUM_OPTIONS],
    correct_index: usize,
    #[serde(default)]
    explanation: String,
}

/// Load the question table compiled into the binary.
pub fn load_bundled_questions() -> Result<QuestionBank, LoadError> {
    parse_questions(BUNDLED_QUESTIONS, BUNDLED_ORIGIN)
}

/// Load a question table from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBank, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_questions(&json_content, &path.display().to_string())
}

/// Parse a question table. `origin` names the source in error messages.
pub fn parse_questions(json: &str, origin: &str) -> Result<QuestionBank, LoadError> {
    let raw: BTreeMap<String, Vec<QuestionRecord>> =
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    if raw.is_empty() {
        return Err(LoadError::NoTracks {
            origin: origin.to_string(),
        });
    }

    let mut tracks = BTreeMap::new();
    for (key, records) in raw {
        let track: Track = key.parse()?;
        if tracks.contains_key(&track) {
            return Err(LoadError::DuplicateTrack(track));
        }
        if records.is_empty() {
            return Err(LoadError::EmptyTrack(track));
        }

        let questions = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                Question::new(
                    track,
                    record.text,
                    record.options,
                    record.correct_index,
                    record.explanation,
                )
                .map_err(|source| LoadError::InvalidQuestion {
                    track,
                    position,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if questions.len() < DEFAULT_SESSION_LENGTH {
            warn!(
                "[Loader] Track {} has only {} questions; sessions will repeat questions.",
                track.id(),
                questions.len()
            );
        }
        debug!("[Loader] Track {}: {} questions", track.id(), questions.len());
        tracks.insert(track, questions);
    }

    Ok(QuestionBank::new(tracks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_table() {
        let json = r#"{
            "react": [
                { "text": "What is JSX?", "options": ["a", "b", "c", "d"], "correct_index": 0 }
            ]
        }"#;
        let bank = parse_questions(json, "test").unwrap();
        let questions = bank.questions_for(Track::React).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].explanation(), "");
        assert_eq!(questions[0].track(), Track::React);
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let json = r#"{ "cpp": [ { "text": "q", "options": ["a", "b", "c", "d"], "correct_index": 7 } ] }"#;
        let err = parse_questions(json, "test").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidQuestion {
                track: Track::Cpp,
                position: 0,
                ..
            }
        ));
    }

    #[test]
    fn rejects_wrong_option_count() {
        let json = r#"{ "js": [ { "text": "q", "options": ["a", "b", "c"], "correct_index": 0 } ] }"#;
        let err = parse_questions(json, "test").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn rejects_unknown_and_empty_tracks() {
        let err = parse_questions(r#"{ "cobol": [] }"#, "test").unwrap_err();
        assert!(matches!(err, LoadError::UnknownTrack(UnknownTrackError(ref id)) if id == "cobol"));

        let err = parse_questions(r#"{ "python": [] }"#, "test").unwrap_err();
        assert!(matches!(err, LoadError::EmptyTrack(Track::Python)));

        let err = parse_questions("{}", "test").unwrap_err();
        assert_eq!(err.to_string(), "test does not contain any tracks");
    }

    #[test]
    fn rejects_keys_naming_the_same_track() {
        let json = r#"{
            "python": [
                { "text": "A", "options": ["a", "b", "c", "d"], "correct_index": 0 },
                { "text": "B", "options": ["a", "b", "c", "d"], "correct_index": 0 }
            ],
            "Python": [
                { "text": "C", "options": ["a", "b", "c", "d"], "correct_index": 0 }
            ]
        }"#;
        let err = parse_questions(json, "test").unwrap_err();
        assert!(matches!(err, LoadError::DuplicateTrack(Track::Python)));
        assert_eq!(err.to_string(), "track Python appears more than once");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_questions_from_json("does/not/exist.json").unwrap_err();
        assert!(err.to_string().starts_with("failed to read does/not/exist.json"));
    }
}
