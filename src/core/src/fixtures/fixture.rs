use crate::scoring::Score;
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One scheduled match as published by the FPL `fixtures` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    #[serde(default)]
    pub event: Option<i32>,
    pub team_h: u32,
    pub team_a: u32,
    pub kickoff_time: DateTime<Utc>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub team_h_score: Option<u8>,
    #[serde(default)]
    pub team_a_score: Option<u8>,
}

impl Fixture {
    /// Reads a fixtures payload, keeping only well-formed records.
    ///
    /// Anything that is not an array yields an empty list.
    pub fn parse_list(value: &Value) -> Vec<Fixture> {
        let Some(items) = value.as_array() else {
            if !value.is_null() {
                warn!("fixtures payload is not an array, ignoring");
            }
            return Vec::new();
        };

        let fixtures: Vec<Fixture> = items
            .iter()
            .filter_map(|item| Fixture::deserialize(item).ok())
            .collect();

        let dropped = items.len() - fixtures.len();
        if dropped > 0 {
            warn!("dropped {} malformed fixture records out of {}", dropped, items.len());
        }

        fixtures
    }

    pub fn matchweek(&self) -> Option<u32> {
        self.event
            .filter(|event| *event > 0)
            .and_then(|event| u32::try_from(event).ok())
    }

    /// Score used to grade predictions: the final score once finished, 0-0 before that.
    pub fn live_score(&self) -> Score {
        if !self.finished {
            return Score::default();
        }

        Score::new(
            self.team_h_score.unwrap_or_default(),
            self.team_a_score.unwrap_or_default(),
        )
    }
}
