use crate::common::fallback::not_found_handler;
use crate::config::WebConfig;
use crate::fpl::fpl_routes;
use crate::home::home_routes;
use crate::matchweeks::matchweek_routes;
use crate::predict::predict_routes;
use crate::score::score_routes;
use crate::PicksAppData;
use axum::Router;
use tower_http::services::ServeDir;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create(config: &WebConfig) -> Router<PicksAppData> {
        Router::<PicksAppData>::new()
            .merge(home_routes())
            .merge(fpl_routes())
            .merge(matchweek_routes())
            .merge(score_routes())
            .merge(predict_routes())
            .nest_service("/static", ServeDir::new(&config.static_dir))
            .fallback(not_found_handler)
    }
}
