use std::collections::BTreeMap;

use crate::models::{Question, Track, UnknownTrackError};

use super::loader::{LoadError, load_bundled_questions};

/// Read-only question table, keyed by track.
///
/// Built once at startup and shared by every session; there are no mutation operations.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    tracks: BTreeMap<Track, Vec<Question>>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(tracks: BTreeMap<Track, Vec<Question>>) -> Self {
        Self { tracks }
    }

    /// The question table compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the embedded data is malformed.
    pub fn bundled() -> Result<Self, LoadError> {
        load_bundled_questions()
    }

    /// Questions for `track`, in their stored order.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTrackError` if the bank holds no questions for the track.
    pub fn questions_for(&self, track: Track) -> Result<&[Question], UnknownTrackError> {
        self.tracks
            .get(&track)
            .filter(|questions| !questions.is_empty())
            .map(Vec::as_slice)
            .ok_or_else(|| UnknownTrackError(track.id().to_string()))
    }

    /// Same as [`QuestionBank::questions_for`], keyed by track identifier.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTrackError` for identifiers outside the track set, or tracks with no
    /// questions.
    pub fn questions_for_id(&self, id: &str) -> Result<&[Question], UnknownTrackError> {
        self.questions_for(id.parse()?)
    }

    /// Tracks that have at least one question, in menu order.
    pub fn tracks(&self) -> impl Iterator<Item = Track> + '_ {
        self.tracks
            .iter()
            .filter(|(_, questions)| !questions.is_empty())
            .map(|(track, _)| *track)
    }

    /// Total number of questions across all tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(track: Track, text: &str) -> Question {
        Question::new(track, text, ["a", "b", "c", "d"].map(String::from), 0, "").unwrap()
    }

    #[test]
    fn bundled_bank_covers_every_track() {
        let bank = QuestionBank::bundled().unwrap();
        for track in Track::ALL {
            let questions = bank.questions_for(track).unwrap();
            assert!(questions.len() >= 10, "{track} has {} questions", questions.len());
            assert!(questions.iter().all(|q| q.track() == track));
        }
        assert_eq!(bank.tracks().collect::<Vec<_>>(), Track::ALL.to_vec());
        assert_eq!(bank.len(), 40);
    }

    #[test]
    fn unknown_identifier_fails() {
        let bank = QuestionBank::bundled().unwrap();
        let err = bank.questions_for_id("haskell").unwrap_err();
        assert_eq!(err, UnknownTrackError("haskell".to_string()));
        assert!(bank.questions_for_id("react").is_ok());
    }

    #[test]
    fn missing_or_empty_track_fails() {
        let mut tracks = BTreeMap::new();
        tracks.insert(Track::Python, vec![question(Track::Python, "q1")]);
        tracks.insert(Track::Cpp, Vec::new());
        let bank = QuestionBank::new(tracks);

        assert!(bank.questions_for(Track::Python).is_ok());
        assert_eq!(
            bank.questions_for(Track::Cpp).unwrap_err(),
            UnknownTrackError("cpp".to_string())
        );
        assert!(bank.questions_for(Track::React).is_err());
        assert_eq!(bank.tracks().collect::<Vec<_>>(), vec![Track::Python]);
    }
}
