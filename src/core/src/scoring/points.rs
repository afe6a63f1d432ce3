use crate::scoring::{Prediction, Score};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Points {
    None,
    CorrectResult,
    ExactScore,
}

impl Points {
    pub fn value(&self) -> u8 {
        match self {
            Points::None => 0,
            Points::CorrectResult => 1,
            Points::ExactScore => 3,
        }
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for Points {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

/// Grades a prediction against the actual (or live) score.
///
/// Exact scoreline earns 3, the right home win / away win / draw earns 1,
/// anything else (including an incomplete pick) earns nothing.
pub fn score(prediction: &Prediction, actual: &Score) -> Points {
    let Some(predicted) = prediction.score() else {
        return Points::None;
    };

    if predicted == *actual {
        return Points::ExactScore;
    }

    if predicted.outcome() == actual.outcome() {
        Points::CorrectResult
    } else {
        Points::None
    }
}
