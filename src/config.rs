//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("{var} must be an http(s) URL, got {value:?}")]
    NotHttpUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Remote seat-reservation API that `/api/*` is forwarded to. Unset means
    /// the browser talks to the API directly.
    pub upstream_api: Option<String>,
    pub proxy_timeout_secs: u64,
}

impl Config {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STUDYHALL_UPSTREAM_API`: base URL of the remote API
    /// - `STUDYHALL_PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let upstream_api = parse_upstream(std::env::var("STUDYHALL_UPSTREAM_API").ok().as_deref())?;
        let proxy_timeout_secs = parse_timeout(std::env::var("STUDYHALL_PROXY_TIMEOUT_SECS").ok().as_deref())?;
        Ok(Self { port, upstream_api, proxy_timeout_secs })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_upstream(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::NotHttpUrl { var: "STUDYHALL_UPSTREAM_API", value: value.to_owned() });
    }
    Ok(Some(value.trim_end_matches('/').to_owned()))
}

fn parse_timeout(raw: Option<&str>) -> Result<u64, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PROXY_TIMEOUT_SECS),
        Some(value) => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::Invalid { var: "STUDYHALL_PROXY_TIMEOUT_SECS", value: value.to_owned() }),
        },
    }
}
