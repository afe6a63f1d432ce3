mod client;
pub mod proxy;
pub mod routes;

pub use client::*;

use crate::PicksAppData;
use axum::Router;

pub fn fpl_routes() -> Router<PicksAppData> {
    routes::routes()
}
