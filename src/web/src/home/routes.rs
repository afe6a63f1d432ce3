use crate::PicksAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<PicksAppData> {
    Router::new().route("/", get(super::home_action))
}
