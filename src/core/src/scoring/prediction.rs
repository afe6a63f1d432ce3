use crate::scoring::{Outcome, Score};
use serde::{Deserialize, Serialize};

/// Highest goal count selectable for one side of a pick.
pub const MAX_PICK: u8 = 9;

/// A user's guessed scoreline. Either side may still be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub home: Option<u8>,
    pub away: Option<u8>,
}

impl Prediction {
    pub fn new(home: Option<u8>, away: Option<u8>) -> Self {
        Prediction {
            home: home.filter(|goals| *goals <= MAX_PICK),
            away: away.filter(|goals| *goals <= MAX_PICK),
        }
    }

    pub fn exact(home: u8, away: u8) -> Self {
        Self::new(Some(home), Some(away))
    }

    /// Reads picks as submitted by a form: empty or out-of-range input is unset.
    pub fn parse(home: &str, away: &str) -> Self {
        Self::new(parse_pick(home), parse_pick(away))
    }

    pub fn score(&self) -> Option<Score> {
        match (self.home, self.away) {
            (Some(home), Some(away)) => Some(Score::new(home, away)),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.score().map(|score| score.outcome())
    }

    pub fn is_complete(&self) -> bool {
        self.score().is_some()
    }

    pub fn swapped(&self) -> Self {
        Prediction {
            home: self.away,
            away: self.home,
        }
    }
}

pub fn parse_pick(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|goals| *goals <= MAX_PICK)
}
