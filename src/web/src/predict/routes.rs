use crate::PicksAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<PicksAppData> {
    Router::new().route("/predict", get(super::predict_get_action))
}
