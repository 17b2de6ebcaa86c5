//! Player identity and session score

use std::fmt;

use crate::board::Stone;

/// A player in a match: display name, fixed stone color and the
/// cumulative score across games of the session
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Player {
    name: String,
    stone: Stone,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, stone: Stone) -> Self {
        Self {
            name: name.into(),
            stone,
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stone(&self) -> Stone {
        self.stone
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Credit one game win
    pub(crate) fn add_score(&mut self) {
        self.score += 1;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.stone)
    }
}
