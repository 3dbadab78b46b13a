use thiserror::Error;

use super::Track;

/// Every question offers exactly this many options.
pub const NUM_OPTIONS: usize = 4;

/// Shown in place of an empty explanation.
pub const DEFAULT_EXPLANATION: &str = "Keep learning!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("correct index {index} is out of range for {} options", NUM_OPTIONS)]
    CorrectIndexOutOfRange { index: usize },
}

/// A multiple-choice question belonging to one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [String; NUM_OPTIONS],
    correct_index: usize,
    track: Track,
    explanation: String,
}

impl Question {
    /// Build a question, checking that `correct_index` points into `options`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::CorrectIndexOutOfRange` if `correct_index >= NUM_OPTIONS`.
    pub fn new(
        track: Track,
        text: impl Into<String>,
        options: [String; NUM_OPTIONS],
        correct_index: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        if correct_index >= NUM_OPTIONS {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
            });
        }

        Ok(Self {
            text: text.into(),
            options,
            correct_index,
            track,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String; NUM_OPTIONS] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn track(&self) -> Track {
        self.track
    }

    /// The stored explanation, which may be empty.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// The explanation to show after answering, falling back to `DEFAULT_EXPLANATION`.
    #[must_use]
    pub fn explanation_or_default(&self) -> &str {
        if self.explanation.trim().is_empty() {
            DEFAULT_EXPLANATION
        } else {
            &self.explanation
        }
    }

    #[must_use]
    pub fn is_correct(&self, selected_index: usize) -> bool {
        selected_index == self.correct_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> [String; NUM_OPTIONS] {
        ["a", "b", "c", "d"].map(String::from)
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let err = Question::new(Track::Python, "q", options(), 4, "").unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 4 });
    }

    #[test]
    fn empty_explanation_falls_back_to_placeholder() {
        let question = Question::new(Track::React, "q", options(), 2, "").unwrap();
        assert_eq!(question.explanation(), "");
        assert_eq!(question.explanation_or_default(), DEFAULT_EXPLANATION);
        assert_eq!(question.correct_option(), "c");
        assert!(question.is_correct(2));
        assert!(!question.is_correct(0));
    }
}
