use crate::{ApiResult, PicksAppData};
use axum::extract::{OriginalUri, State};
use axum::response::IntoResponse;
use axum::Json;

const PROXY_PREFIX: &str = "/api/fpl/";

/// `GET /api/fpl/{*endpoint}`: forwards path and query string upstream and
/// answers with the upstream JSON untouched.
///
/// The path is taken from the raw request URI, so it is forwarded still
/// percent-encoded.
pub async fn fpl_proxy_action(
    State(state): State<PicksAppData>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<impl IntoResponse> {
    let endpoint = uri.path().strip_prefix(PROXY_PREFIX).unwrap_or_default();

    let body = state.fpl.fetch(endpoint, uri.query()).await?;

    Ok(Json(body))
}
