use crate::PicksAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<PicksAppData> {
    Router::new().route("/api/score", get(super::score_get_action))
}
