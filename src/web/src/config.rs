use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:18000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR '{0}': {1}")]
    BindAddr(String, std::net::AddrParseError),

    #[error("invalid FPL_TIMEOUT_SECS '{0}'")]
    Timeout(String),
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Base URL of the FPL API, without a trailing slash.
    pub fpl_api_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub upstream_timeout: Duration,
    /// Served under `/static`; team crests live in `crests/`.
    pub static_dir: PathBuf,
}

impl WebConfig {
    /// Reads the environment, after loading `.env` when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("FPL_API_URL").ok(),
            env::var("BIND_ADDR").ok(),
            env::var("FPL_TIMEOUT_SECS").ok(),
            env::var("STATIC_DIR").ok(),
        )
    }

    pub fn from_vars(
        fpl_api_url: Option<String>,
        bind_addr: Option<String>,
        timeout_secs: Option<String>,
        static_dir: Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind_addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::BindAddr(bind_addr.clone(), e))?;

        let upstream_timeout = match timeout_secs {
            Some(secs) => secs
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Timeout(secs))?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(WebConfig {
            fpl_api_url: fpl_api_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            bind_addr,
            upstream_timeout,
            static_dir: PathBuf::from(static_dir.unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())),
        })
    }

    pub fn with_fpl_api_url(fpl_api_url: Option<String>) -> Self {
        WebConfig {
            fpl_api_url,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WebConfig::from_vars(None, None, None, None).unwrap();

        assert_eq!(config.fpl_api_url, None);
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 18000)));
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let config = WebConfig::from_vars(
            Some("https://fantasy.premierleague.com/api/".to_string()),
            Some("127.0.0.1:8080".to_string()),
            Some("3".to_string()),
            Some("/srv/degen/static".to_string()),
        )
        .unwrap();

        assert_eq!(
            config.fpl_api_url.as_deref(),
            Some("https://fantasy.premierleague.com/api")
        );
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
        assert_eq!(config.static_dir, PathBuf::from("/srv/degen/static"));
    }

    #[test]
    fn test_blank_base_url_is_absent() {
        let config = WebConfig::from_vars(Some("  ".to_string()), None, None, None).unwrap();

        assert_eq!(config.fpl_api_url, None);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            WebConfig::from_vars(None, Some("localhost".to_string()), None, None),
            Err(ConfigError::BindAddr(..))
        ));
        assert!(matches!(
            WebConfig::from_vars(None, None, Some("soon".to_string()), None),
            Err(ConfigError::Timeout(_))
        ));
    }
}
