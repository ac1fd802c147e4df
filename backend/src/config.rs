//! Server configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first when present.
//!
//! | variable                 | default     |
//! |--------------------------|-------------|
//! | `STUDIO_HOST`            | `127.0.0.1` |
//! | `STUDIO_PORT`            | `8080`      |
//! | `WORKFLOW_URL`           | unset       |
//! | `WORKFLOW_TIMEOUT_SECS`  | `600`       |
//! | `STUDIO_OPEN_BROWSER`    | `true`      |
//! | `STUDIO_UPLOAD_LIMIT_MB` | `25`        |

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("invalid value {value:?} for {key}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Endpoint of the content pipeline. Without it `/generate` answers 500.
    pub workflow_url: Option<String>,
    pub workflow_timeout: Duration,
    pub open_browser: bool,
    pub upload_limit_bytes: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("STUDIO_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse(&lookup, "STUDIO_PORT", 8080)?;
        let workflow_url = lookup("WORKFLOW_URL").filter(|url| !url.trim().is_empty());
        let timeout_secs: u64 = parse(&lookup, "WORKFLOW_TIMEOUT_SECS", 600)?;
        let open_browser = parse(&lookup, "STUDIO_OPEN_BROWSER", true)?;
        let upload_limit_mb: usize = parse(&lookup, "STUDIO_UPLOAD_LIMIT_MB", 25)?;

        Ok(Self {
            host,
            port,
            workflow_url,
            workflow_timeout: Duration::from_secs(timeout_secs),
            open_browser,
            upload_limit_bytes: upload_limit_mb * 1024 * 1024,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse();
            parsed.map_err(|_| ConfigError { key, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.workflow_url, None);
        assert_eq!(config.workflow_timeout, Duration::from_secs(600));
        assert!(config.open_browser);
        assert_eq!(config.upload_limit_bytes, 25 * 1024 * 1024);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("STUDIO_PORT", "9000"),
            ("WORKFLOW_URL", "http://pipeline:8000/invoke"),
            ("STUDIO_OPEN_BROWSER", "false"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.workflow_url.as_deref(), Some("http://pipeline:8000/invoke"));
        assert!(!config.open_browser);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("STUDIO_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.key, "STUDIO_PORT");
    }

    #[test]
    fn blank_workflow_url_is_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[("WORKFLOW_URL", "  ")])).unwrap();
        assert!(config.workflow_url.is_none());
    }
}
