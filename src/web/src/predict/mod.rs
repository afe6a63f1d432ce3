pub mod routes;

use crate::matchweeks::load_session;
use crate::PicksAppData;
use askama::Template;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use log::error;
use picks_core::{parse_pick, DateUtils, MatchCard, PickSide, PredictionSession, SessionAction, MAX_PICK};
use std::collections::HashMap;

pub fn predict_routes() -> axum::Router<PicksAppData> {
    routes::routes()
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "predict/index.html")]
pub struct PredictTemplate {
    pub title: String,
    pub matchweeks: Vec<MatchweekOption>,
    pub editable: bool,
    pub cards: Vec<PredictCardItem>,
}

pub struct MatchweekOption {
    pub event: u32,
    pub label: String,
    pub selected: bool,
}

pub struct PredictCardItem {
    pub fixture_id: u32,
    pub kickoff: String,
    pub venue: String,
    pub home_team: String,
    pub away_team: String,
    pub home_crest: String,
    pub away_crest: String,
    pub home_options: Vec<PickOption>,
    pub away_options: Vec<PickOption>,
    pub live: String,
    pub momentum_percent: u8,
    pub points: u8,
    pub share_url: String,
}

pub struct PickOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// `GET /predict?event=N&home_{id}=h&away_{id}=a`
///
/// Picks travel in the query string; nothing is stored between requests.
pub async fn predict_get_action(
    State(state): State<PicksAppData>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let event = params.get("event").and_then(|value| value.parse::<u32>().ok());

    let mut session = match load_session(&state, event).await {
        Ok(session) => session,
        Err(e) => {
            error!("Error loading FPL data: {:?}", e);
            PredictionSession::default()
        }
    };

    apply_picks(&mut session, &params);

    PredictTemplate::from(&session)
}

fn apply_picks(session: &mut PredictionSession, params: &HashMap<String, String>) {
    let fixture_ids: Vec<u32> = session.cards().iter().map(|card| card.fixture_id).collect();

    for fixture_id in fixture_ids {
        for (prefix, side) in [("home", PickSide::Home), ("away", PickSide::Away)] {
            if let Some(value) = params.get(&format!("{}_{}", prefix, fixture_id)) {
                session.apply(SessionAction::SetPick {
                    fixture_id,
                    side,
                    value: parse_pick(value),
                });
            }
        }
    }
}

impl From<&PredictionSession> for PredictTemplate {
    fn from(session: &PredictionSession) -> Self {
        let selected = session.selected();

        PredictTemplate {
            title: match selected {
                Some(event) => format!("Matchday {}", event),
                None => "Matchday N/A".to_string(),
            },
            matchweeks: session
                .summaries()
                .iter()
                .map(|summary| MatchweekOption {
                    event: summary.event,
                    label: summary.label(),
                    selected: Some(summary.event) == selected,
                })
                .collect(),
            editable: session.is_editable(),
            cards: session
                .cards()
                .iter()
                .map(|card| PredictCardItem::new(card, selected.unwrap_or_default()))
                .collect(),
        }
    }
}

impl PredictCardItem {
    fn new(card: &MatchCard, matchweek: u32) -> Self {
        PredictCardItem {
            fixture_id: card.fixture_id,
            kickoff: DateUtils::format_kickoff(card.kickoff_time),
            venue: card.venue.clone(),
            home_team: card.home_team.clone(),
            away_team: card.away_team.clone(),
            home_crest: card.home_crest.clone(),
            away_crest: card.away_crest.clone(),
            home_options: pick_options(card.prediction.home),
            away_options: pick_options(card.prediction.away),
            live: card.live_score.to_string(),
            momentum_percent: card.momentum_percent(),
            points: card.points().value(),
            share_url: card.share_url(matchweek),
        }
    }
}

fn pick_options(current: Option<u8>) -> Vec<PickOption> {
    let unset = PickOption {
        value: String::new(),
        label: "-".to_string(),
        selected: current.is_none(),
    };

    std::iter::once(unset)
        .chain((0..=MAX_PICK).map(|goals| PickOption {
            value: goals.to_string(),
            label: goals.to_string(),
            selected: current == Some(goals),
        }))
        .collect()
}
