use std::fmt;

/// End-of-session tier, derived from `score / answered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    /// At least 80% correct.
    Excellent,
    /// At least 60% correct.
    Good,
    NeedsPractice,
}

impl Grade {
    /// Tier for `score` correct answers out of `answered`.
    ///
    /// Thresholds are compared in integer arithmetic so 6/10 lands exactly on `Good`.
    #[must_use]
    pub fn from_score(score: usize, answered: usize) -> Self {
        if answered == 0 {
            return Grade::NeedsPractice;
        }
        if score * 5 >= answered * 4 {
            Grade::Excellent
        } else if score * 5 >= answered * 3 {
            Grade::Good
        } else {
            Grade::NeedsPractice
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "excellent",
            Grade::Good => "good",
            Grade::NeedsPractice => "needs practice",
        }
    }

    /// Message shown on the summary screen.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent! You've mastered this language!",
            Grade::Good => "Good job! Keep practicing!",
            Grade::NeedsPractice => "Keep learning! You'll improve with practice.",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(Grade::from_score(10, 10), Grade::Excellent);
        assert_eq!(Grade::from_score(9, 10), Grade::Excellent);
        assert_eq!(Grade::from_score(8, 10), Grade::Excellent);
        assert_eq!(Grade::from_score(7, 10), Grade::Good);
        assert_eq!(Grade::from_score(6, 10), Grade::Good);
        assert_eq!(Grade::from_score(5, 10), Grade::NeedsPractice);
        assert_eq!(Grade::from_score(0, 10), Grade::NeedsPractice);
        assert_eq!(Grade::from_score(3, 5), Grade::Good);
        assert_eq!(Grade::from_score(0, 0), Grade::NeedsPractice);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Grade::NeedsPractice.to_string(), "needs practice");
        assert_eq!(Grade::Good.message(), "Good job! Keep practicing!");
    }
}
