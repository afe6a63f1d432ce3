use thiserror::Error;

#[derive(Debug, Error)]
pub enum PicksError {
    #[error("invalid FPL bootstrap-static data: {0}")]
    InvalidBootstrap(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PicksResult<T> = Result<T, PicksError>;
