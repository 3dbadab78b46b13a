use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A selectable programming-language topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Track {
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "js")]
    JavaScript,
    #[serde(rename = "cpp")]
    Cpp,
    #[serde(rename = "react")]
    React,
}

/// Raised for a track identifier outside the fixed set, or a track the bank has no
/// questions for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown track: {0}")]
pub struct UnknownTrackError(pub String);

impl Track {
    /// All tracks in menu order.
    pub const ALL: [Track; 4] = [Track::Python, Track::JavaScript, Track::Cpp, Track::React];

    /// Stable identifier used in question files and on the command line.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Track::Python => "python",
            Track::JavaScript => "js",
            Track::Cpp => "cpp",
            Track::React => "react",
        }
    }

    /// Human-readable name for menus and headers.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Track::Python => "Python",
            Track::JavaScript => "JavaScript",
            Track::Cpp => "C++",
            Track::React => "React",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Track {
    type Err = UnknownTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Track::ALL
            .into_iter()
            .find(|track| track.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownTrackError(s.to_string()))
    }
}
