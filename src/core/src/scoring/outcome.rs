use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Score { home, away }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::of(self.home, self.away)
    }

    pub fn swapped(&self) -> Self {
        Score::new(self.away, self.home)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl Outcome {
    pub fn of(home: u8, away: u8) -> Self {
        match home.cmp(&away) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Less => Outcome::AwayWin,
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// Width of the live momentum bar, in percent.
    pub fn momentum_percent(&self) -> u8 {
        match self {
            Outcome::HomeWin => 75,
            Outcome::AwayWin => 25,
            Outcome::Draw => 50,
        }
    }
}
