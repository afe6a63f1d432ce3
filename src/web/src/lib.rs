mod common;
pub mod config;
mod error;
pub mod fpl;
mod home;
mod matchweeks;
mod predict;
mod routes;
mod score;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, WebConfig};
pub use error::{ApiError, ApiResult};

use crate::fpl::FplClient;
use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use log::{error, info};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct DegenPicksServer {
    data: PicksAppData,
}

impl DegenPicksServer {
    pub fn new(data: PicksAppData) -> Self {
        DegenPicksServer { data }
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let app = ServerRoutes::create(&self.data.config)
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("Internal server error - handler panicked".to_string())
                            .into_response()
                    })),
            )
            .with_state(self.data.clone());

        let addr = self.data.config.bind_addr;

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://{}", listener.local_addr()?);

        if !self.data.fpl.is_configured() {
            error!("FPL_API_URL is not set, every FPL request will fail");
        }

        axum::serve(listener, app).await
    }
}

pub struct PicksAppData {
    pub config: Arc<WebConfig>,
    pub fpl: Arc<FplClient>,
}

impl PicksAppData {
    pub fn new(config: WebConfig) -> reqwest::Result<Self> {
        let fpl = FplClient::new(&config)?;

        Ok(PicksAppData {
            config: Arc::new(config),
            fpl: Arc::new(fpl),
        })
    }
}

impl Clone for PicksAppData {
    fn clone(&self) -> Self {
        PicksAppData {
            config: Arc::clone(&self.config),
            fpl: Arc::clone(&self.fpl),
        }
    }
}
