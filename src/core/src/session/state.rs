use crate::fixtures::{Fixture, TeamDirectory};
use crate::matchweek::{fixtures_for, MatchweekSelection, MatchweekSummary};
use crate::scoring::Prediction;
use crate::session::{FixtureRequest, MatchCard, PickSide, SessionAction};
use log::{debug, warn};

/// Everything the predict screen shows, driven only through [`SessionAction`]s.
#[derive(Debug, Clone, Default)]
pub struct PredictionSession {
    teams: TeamDirectory,
    selection: MatchweekSelection,
    selected: Option<u32>,
    cards: Vec<MatchCard>,
    next_sequence: u64,
    pending: Option<FixtureRequest>,
}

impl PredictionSession {
    pub fn new(teams: TeamDirectory) -> Self {
        PredictionSession {
            teams,
            ..Default::default()
        }
    }

    /// Applies one action. Selecting an open matchweek returns the fetch the
    /// caller has to perform (other ids are ignored); its response must come back as `FixturesLoaded` or
    /// `FixturesFailed` with the same ticket.
    pub fn apply(&mut self, action: SessionAction) -> Option<FixtureRequest> {
        match action {
            SessionAction::MatchweeksLoaded { selection, fixtures } => {
                self.selected = selection.first().map(|summary| summary.event);
                self.cards = match self.selected {
                    Some(event) => self.cards_for(fixtures_for(&fixtures, event)),
                    None => Vec::new(),
                };
                self.selection = selection;
                self.pending = None;
                None
            }
            SessionAction::SelectMatchweek { event } => {
                if self.selection.get(event).is_none() {
                    debug!("ignoring selection of matchweek {} which is not open", event);
                    return None;
                }

                self.next_sequence += 1;

                let request = FixtureRequest {
                    sequence: self.next_sequence,
                    event,
                };

                self.selected = Some(event);
                self.cards.clear();
                self.pending = Some(request);

                Some(request)
            }
            SessionAction::FixturesLoaded { ticket, fixtures } => {
                if self.take_pending(ticket) {
                    self.cards = self.cards_for(fixtures.iter());
                }
                None
            }
            SessionAction::FixturesFailed { ticket } => {
                if self.take_pending(ticket) {
                    warn!("fixtures for matchweek {} failed to load", ticket.event);
                    self.cards.clear();
                }
                None
            }
            SessionAction::SetPick {
                fixture_id,
                side,
                value,
            } => {
                self.set_pick(fixture_id, side, value);
                None
            }
        }
    }

    pub fn summaries(&self) -> &[MatchweekSummary] {
        &self.selection.summaries
    }

    pub fn current(&self) -> Option<u32> {
        self.selection.current
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn cards(&self) -> &[MatchCard] {
        &self.cards
    }

    pub fn pending(&self) -> Option<FixtureRequest> {
        self.pending
    }

    /// Picks can only be changed for the current matchweek.
    pub fn is_editable(&self) -> bool {
        self.selected.is_some() && self.selected == self.selection.current
    }

    fn take_pending(&mut self, ticket: FixtureRequest) -> bool {
        if self.pending != Some(ticket) {
            debug!(
                "discarding stale fixtures response #{} for matchweek {}",
                ticket.sequence, ticket.event
            );
            return false;
        }

        self.pending = None;
        true
    }

    fn set_pick(&mut self, fixture_id: u32, side: PickSide, value: Option<u8>) {
        if !self.is_editable() {
            return;
        }

        let Some(card) = self.cards.iter_mut().find(|card| card.fixture_id == fixture_id) else {
            return;
        };

        let prediction = card.prediction;
        card.prediction = match side {
            PickSide::Home => Prediction::new(value, prediction.away),
            PickSide::Away => Prediction::new(prediction.home, value),
        };
    }

    fn cards_for<'a>(&self, fixtures: impl IntoIterator<Item = &'a Fixture>) -> Vec<MatchCard> {
        fixtures
            .into_iter()
            .map(|fixture| MatchCard::new(fixture, &self.teams))
            .collect()
    }
}
