use crate::PicksAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<PicksAppData> {
    Router::new().route("/api/fpl/{*endpoint}", get(super::proxy::fpl_proxy_action))
}
