pub mod error;
pub mod fixtures;
pub mod matchweek;
pub mod scoring;
pub mod session;
pub mod share;
pub mod utils;

pub use error::{PicksError, PicksResult};
pub use fixtures::{Fixture, Team, TeamDirectory, VenueDirectory};
pub use matchweek::{fixtures_for, group_and_select, group_and_select_value, MatchweekSelection, MatchweekSummary};
pub use scoring::{parse_pick, score, Outcome, Points, Prediction, Score, MAX_PICK};
pub use session::{FixtureRequest, MatchCard, PickSide, PredictionSession, SessionAction};
pub use utils::*;
