use chrono::Duration as TimeDelta;
use chrono_tz::Tz;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::StationConfig;
use crate::registry::{default_stations, validate_registry};
use crate::utils::constants::{
    DEFAULT_FRESHNESS_MINUTES, DEFAULT_OUTPUT_PATH, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SOURCE_LABEL, DEFAULT_TIMEZONE, ENV_PREFIX, STATION_NAMESPACE,
};

/// Run settings. Every field has a built-in default, so a run with no
/// configuration file behaves exactly like the stock tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Label written to `metadata.fuente`
    pub source_label: String,
    pub output_path: PathBuf,
    /// IANA name shared by the run clock and declared station timestamps
    pub timezone: String,
    /// XML namespace of the station documents
    pub namespace: String,
    pub freshness_window_minutes: i64,
    pub request_timeout_secs: u64,
    /// Directories that receive a copy of the snapshot after it is written
    pub publish_dirs: Vec<PathBuf>,
    pub stations: Vec<StationConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            timezone: DEFAULT_TIMEZONE.to_string(),
            namespace: STATION_NAMESPACE.to_string(),
            freshness_window_minutes: DEFAULT_FRESHNESS_MINUTES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            publish_dirs: Vec::new(),
            stations: default_stations(),
        }
    }
}

impl Settings {
    /// Load settings from an optional file (format picked by extension) with
    /// `MASTRAL_*` environment overrides on top, then validate them.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!("Loading settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        validate_registry(&self.stations)?;
        self.tz()?;

        if self.freshness_window_minutes < 0 {
            return Err(ProcessingError::Config(format!(
                "freshness_window_minutes must not be negative, got {}",
                self.freshness_window_minutes
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ProcessingError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.namespace.trim().is_empty() {
            return Err(ProcessingError::Config("namespace must not be empty".to_string()));
        }

        Ok(())
    }

    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| ProcessingError::InvalidTimezone(format!("'{}': {}", self.timezone, e)))
    }

    pub fn freshness_window(&self) -> TimeDelta {
        TimeDelta::minutes(self.freshness_window_minutes)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
