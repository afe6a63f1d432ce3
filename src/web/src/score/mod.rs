pub mod routes;

use crate::{ApiError, ApiResult, PicksAppData};
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::Json;
use picks_core::{score, Points, Prediction, Score};
use serde::{Deserialize, Serialize};

pub fn score_routes() -> axum::Router<PicksAppData> {
    routes::routes()
}

#[derive(Deserialize)]
pub struct ScoreGetRequest {
    #[serde(default)]
    home: String,
    #[serde(default)]
    away: String,
    actual_home: u8,
    actual_away: u8,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub prediction: Prediction,
    pub actual: Score,
    pub points: Points,
}

pub async fn score_get_action(
    query: Result<Query<ScoreGetRequest>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(request) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let prediction = Prediction::parse(&request.home, &request.away);
    let actual = Score::new(request.actual_home, request.actual_away);

    Ok(Json(ScoreResponse {
        prediction,
        actual,
        points: score(&prediction, &actual),
    }))
}
