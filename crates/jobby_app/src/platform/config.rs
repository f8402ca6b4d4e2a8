use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use jobby_engine::{ApiSettings, DEFAULT_BASE_URL};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILENAME: &str = "jobby.ron";

#[derive(Parser, Debug, Default)]
#[command(name = "jobby")]
#[command(version)]
#[command(about = "Terminal client for the Jobby job board")]
pub struct Args {
    /// RON config file (default: ./jobby.ron when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the jobs API
    #[arg(long)]
    pub api_base: Option<String>,

    /// Directory holding the stored session and the log file
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Where log lines go
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Path to open first
    #[arg(long, default_value = "/")]
    pub start: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub data_dir: PathBuf,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let defaults = ApiSettings::default();
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: PathBuf::from(".jobby"),
            connect_timeout_secs: defaults.connect_timeout.as_secs(),
            request_timeout_secs: defaults.request_timeout.as_secs(),
            log: LogDestination::File,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the config file named on the command line (which must exist) or
    /// the default one (which may be absent), then applies flag overrides.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILENAME);
                if path.exists() {
                    Self::load(path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_args(args);
        config.level_filter()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    fn apply_args(&mut self, args: &Args) {
        if let Some(base) = &args.api_base {
            self.api_base_url = base.clone();
        }
        if let Some(dir) = &args.data_dir {
            self.data_dir = dir.clone();
        }
        if let Some(log) = args.log {
            self.log = log;
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.api_base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}
