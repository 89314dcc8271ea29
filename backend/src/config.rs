use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

const DEFAULT_CONFIG_PATH: &str = "config/server.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("Invalid inference base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub uploads: UploadConfig,
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub public_path: String,
    pub max_bytes: usize,
    /// Unset keeps uploads forever.
    pub retention_secs: Option<u64>,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads/plant-disease"),
            public_path: "/uploads/plant-disease".to_string(),
            max_bytes: 10 * 1024 * 1024,
            retention_secs: None,
            sweep_interval_secs: 3600,
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Reads the YAML file named by `SERVER_CONFIG` (or `config/server.yaml`
    /// when present), then applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = env::var("SERVER_CONFIG").ok();
        let path = explicit
            .clone()
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if explicit.is_some() || Path::new(&path).exists() {
            Self::from_file(&path)?
        } else {
            log::info!("No config file at {}, using defaults", path);
            Self::default()
        };

        config.apply_env(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(config_str: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(config_str)?;
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_var("PORT", &port)?;
        }
        if let Some(dir) = lookup("UPLOAD_DIR") {
            self.uploads.dir = PathBuf::from(dir);
        }
        if let Some(public_path) = lookup("UPLOAD_PUBLIC_PATH") {
            self.uploads.public_path = public_path;
        }
        if let Some(max_bytes) = lookup("MAX_UPLOAD_BYTES") {
            self.uploads.max_bytes = parse_var("MAX_UPLOAD_BYTES", &max_bytes)?;
        }
        if let Some(retention) = lookup("UPLOAD_RETENTION_SECS") {
            self.uploads.retention_secs = Some(parse_var("UPLOAD_RETENTION_SECS", &retention)?);
        }
        if let Some(interval) = lookup("UPLOAD_SWEEP_INTERVAL_SECS") {
            self.uploads.sweep_interval_secs = parse_var("UPLOAD_SWEEP_INTERVAL_SECS", &interval)?;
        }
        if let Some(base_url) = lookup("INFERENCE_BASE_URL") {
            self.inference.base_url = base_url;
        }
        if let Some(timeout) = lookup("INFERENCE_TIMEOUT_SECS") {
            self.inference.timeout_secs = parse_var("INFERENCE_TIMEOUT_SECS", &timeout)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.inference.base_url)?;
        if self.inference.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "inference.timeout_secs",
                value: "0".to_string(),
            });
        }
        if self.uploads.max_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                name: "uploads.max_bytes",
                value: "0".to_string(),
            });
        }
        if self.uploads.sweep_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "uploads.sweep_interval_secs",
                value: "0".to_string(),
            });
        }
        if !self.uploads.public_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                name: "uploads.public_path",
                value: self.uploads.public_path.clone(),
            });
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn inference_timeout(&self) -> Duration {
        Duration::from_secs(self.inference.timeout_secs)
    }

    pub fn retention(&self) -> Option<Duration> {
        self.uploads.retention_secs.map(Duration::from_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.uploads.sweep_interval_secs)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
