use std::env;
use std::time::Duration;

use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://adpdemo.pperfect.com/ecomService/v28/Json/";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewaySettings {
    pub vendor: VendorConfig,
    pub http: HttpConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VendorConfig {
    pub base_url: String,
    /// Token used by the preconfigured credential strategy.
    #[serde(skip_serializing)]
    pub token_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpConfig {
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            vendor: VendorConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                token_id: None,
            },
            http: HttpConfig {
                request_timeout_secs: None,
                connect_timeout_secs: None,
                user_agent: default_user_agent(),
            },
        }
    }
}

fn default_user_agent() -> String {
    format!("parcel-gateway/{}", env!("CARGO_PKG_VERSION"))
}

impl GatewaySettings {
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source. `from_env` passes
    /// the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Vendor config
        let base_url = lookup("PP_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| {
            GatewayError::Configuration(format!("PP_BASE_URL must be a valid URL: {}", e))
        })?;

        let token_id = lookup("PP_TOKEN_ID")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // HTTP config
        let request_timeout_secs = parse_secs(&lookup, "PP_REQUEST_TIMEOUT_SECS")?;
        let connect_timeout_secs = parse_secs(&lookup, "PP_CONNECT_TIMEOUT_SECS")?;

        let user_agent = lookup("PP_USER_AGENT")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(default_user_agent);

        Ok(Self {
            vendor: VendorConfig { base_url, token_id },
            http: HttpConfig {
                request_timeout_secs,
                connect_timeout_secs,
                user_agent,
            },
        })
    }
}

fn parse_secs<F>(lookup: &F, key: &str) -> Result<Option<u64>, GatewayError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Some(secs)),
            _ => Err(GatewayError::Configuration(format!(
                "{} must be a positive number of seconds",
                key
            ))),
        },
    }
}
