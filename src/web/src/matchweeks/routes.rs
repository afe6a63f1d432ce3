use crate::PicksAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<PicksAppData> {
    Router::new()
        .route("/api/matchweeks", get(super::matchweek_list_action))
        .route(
            "/api/matchweeks/{event}/fixtures",
            get(super::matchweek_fixtures_action),
        )
}
