use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const ENV_PREFIX: &str = "MERCH_LENSE_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid backend_url {url:?}: {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Output format of the stdout log layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Host server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the host server listens on.
    pub bind_addr: SocketAddr,
    /// Base URL `/api/*` requests are forwarded to.
    pub backend_url: String,
    /// Built frontend bundle (`trunk build` output).
    pub dist_dir: PathBuf,
    /// Upstream timeout for one forwarded request.
    pub request_timeout_secs: u64,
    /// Largest request body forwarded to the backend.
    pub max_body_bytes: usize,
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            backend_url: "http://127.0.0.1:8000".to_string(),
            dist_dir: PathBuf::from("frontend/dist"),
            request_timeout_secs: 120,
            max_body_bytes: 50 * 1024 * 1024,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Values given on the command line; unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_addr: Option<SocketAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Layer defaults, the TOML file, `MERCH_LENSE_*` variables and CLI
    /// overrides, in that order.
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn figment(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Figment {
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides.clone()))
    }

    pub fn load(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let config: ServerConfig = Self::figment(config_path, overrides)
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend()?;
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Zero("request_timeout_secs"));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Zero("max_body_bytes"));
        }
        Ok(())
    }

    /// The parsed backend base URL; only `http` and `https` are accepted.
    pub fn backend(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBackendUrl {
            url: self.backend_url.clone(),
            reason,
        };
        let url = Url::parse(&self.backend_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme {other:?}"))),
        }
    }

    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("merch-lense").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
