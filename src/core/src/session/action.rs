use crate::fixtures::Fixture;
use crate::matchweek::MatchweekSelection;

/// Ticket for one fixture fetch; only the latest issued ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureRequest {
    pub sequence: u64,
    pub event: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickSide {
    Home,
    Away,
}

#[derive(Debug, Clone)]
pub enum SessionAction {
    MatchweeksLoaded {
        selection: MatchweekSelection,
        fixtures: Vec<Fixture>,
    },
    SelectMatchweek {
        event: u32,
    },
    FixturesLoaded {
        ticket: FixtureRequest,
        fixtures: Vec<Fixture>,
    },
    FixturesFailed {
        ticket: FixtureRequest,
    },
    SetPick {
        fixture_id: u32,
        side: PickSide,
        value: Option<u8>,
    },
}
