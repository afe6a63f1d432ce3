use crate::config::WebConfig;
use crate::{ApiError, ApiResult};
use log::{debug, error, warn};
use percent_encoding::percent_decode_str;
use picks_core::{Fixture, TeamDirectory};
use reqwest::Client;
use serde_json::Value;

pub const USER_AGENT: &str = "DegenPicks/1.0";

const BOOTSTRAP_ENDPOINT: &str = "bootstrap-static/";
const FIXTURES_ENDPOINT: &str = "fixtures/";

/// Thin pass-through to the FPL API. No retries, no caching.
pub struct FplClient {
    http: Client,
    base_url: Option<String>,
}

impl FplClient {
    pub fn new(config: &WebConfig) -> reqwest::Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(FplClient {
            http,
            base_url: config.fpl_api_url.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    pub fn endpoint_url(&self, endpoint: &str, query: Option<&str>) -> ApiResult<String> {
        let base_url = self.base_url.as_deref().ok_or(ApiError::NotConfigured)?;
        let endpoint = checked_endpoint(endpoint.trim_start_matches('/'))?;

        Ok(match query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}/{}?{}", base_url, endpoint, query),
            None => format!("{}/{}", base_url, endpoint),
        })
    }

    /// Fetches `{base}/{endpoint}[?query]` and returns the JSON body as is.
    pub async fn fetch(&self, endpoint: &str, query: Option<&str>) -> ApiResult<Value> {
        let url = self.endpoint_url(endpoint, query)?;

        debug!("fetching {}", url);

        match self.request(&url).await {
            Ok(value) => Ok(value),
            Err(e) => {
                error!("Failed to fetch from FPL API ({}): {}", url, e);
                Err(ApiError::UpstreamFailed)
            }
        }
    }

    pub async fn teams(&self) -> ApiResult<TeamDirectory> {
        let bootstrap = self.fetch(BOOTSTRAP_ENDPOINT, None).await?;

        Ok(TeamDirectory::from_bootstrap(&bootstrap)?)
    }

    /// All fixtures, or only one matchweek's when `event` is given.
    pub async fn fixtures(&self, event: Option<u32>) -> ApiResult<Vec<Fixture>> {
        let query = event.map(|event| format!("event={}", event));
        let payload = self.fetch(FIXTURES_ENDPOINT, query.as_deref()).await?;

        Ok(Fixture::parse_list(&payload))
    }

    async fn request(&self, url: &str) -> reqwest::Result<Value> {
        self.http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}

/// Keeps a still percent-encoded endpoint path under the base URL: no dot
/// segments and no encoded separators, whatever the encoding.
fn checked_endpoint(endpoint: &str) -> ApiResult<&str> {
    let escapes_base = endpoint.split('/').any(|segment| {
        let decoded = percent_decode_str(segment).decode_utf8_lossy();

        decoded == "."
            || decoded == ".."
            || decoded.contains(['/', '\\', '?', '#'])
    });

    if escapes_base {
        warn!("rejecting FPL endpoint '{}'", endpoint);
        return Err(ApiError::BadRequest(format!("Invalid FPL endpoint: {}", endpoint)));
    }

    Ok(endpoint)
}
