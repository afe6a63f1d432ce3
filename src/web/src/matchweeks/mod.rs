mod loader;
pub mod routes;

pub use loader::load_session;

use crate::{ApiError, ApiResult, PicksAppData};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use picks_core::{MatchCard, MatchweekSummary, Points, PredictionSession};
use serde::{Deserialize, Serialize};

pub fn matchweek_routes() -> axum::Router<PicksAppData> {
    routes::routes()
}

#[derive(Serialize)]
pub struct MatchweekListResponse {
    pub summaries: Vec<MatchweekSummary>,
    pub current: Option<u32>,
    pub selected: Option<u32>,
    pub editable: bool,
    pub cards: Vec<MatchCardView>,
}

#[derive(Serialize)]
pub struct MatchCardView {
    #[serde(flatten)]
    pub card: MatchCard,
    pub points: Points,
    pub momentum_percent: u8,
    pub share_url: Option<String>,
}

impl MatchCardView {
    pub fn new(card: &MatchCard, matchweek: Option<u32>) -> Self {
        MatchCardView {
            card: card.clone(),
            points: card.points(),
            momentum_percent: card.momentum_percent(),
            share_url: matchweek.map(|matchweek| card.share_url(matchweek)),
        }
    }
}

impl From<&PredictionSession> for MatchweekListResponse {
    fn from(session: &PredictionSession) -> Self {
        MatchweekListResponse {
            summaries: session.summaries().to_vec(),
            current: session.current(),
            selected: session.selected(),
            editable: session.is_editable(),
            cards: session
                .cards()
                .iter()
                .map(|card| MatchCardView::new(card, session.selected()))
                .collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct MatchweekFixturesRequest {
    event: u32,
}

pub async fn matchweek_list_action(State(state): State<PicksAppData>) -> ApiResult<impl IntoResponse> {
    let session = load_session(&state, None).await?;

    Ok(Json(MatchweekListResponse::from(&session)))
}

pub async fn matchweek_fixtures_action(
    State(state): State<PicksAppData>,
    route_params: Result<Path<MatchweekFixturesRequest>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(route_params) = route_params.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let session = load_session(&state, Some(route_params.event)).await?;
    if session.selected() != Some(route_params.event) {
        return Err(ApiError::NotFound(format!(
            "Matchweek {} is not open",
            route_params.event
        )));
    }

    Ok(Json(MatchweekListResponse::from(&session)))
}
