use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

/// Fatal errors: anything raised outside the per-station loop ends the run.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] ::config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Station '{0}' is registered more than once")]
    DuplicateStation(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Why a single HTTP fetch failed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Per-station failures. The station is left out of the snapshot and the run
/// moves on to the next one.
#[derive(Error, Debug)]
pub enum StationError {
    #[error("Error downloading data from {station}: {source}")]
    Network {
        station: String,
        #[source]
        source: FetchError,
    },

    #[error("Error parsing XML from {station}: {source}")]
    Parse {
        station: String,
        #[source]
        source: xmltree::ParseError,
    },

    #[error("Stale data from {station}: reported {reported}, {age_minutes} minutes old")]
    Stale {
        station: String,
        reported: String,
        age_minutes: i64,
    },

    #[error("Incomplete data from {station}: missing <{field}> element")]
    MissingFields {
        station: String,
        field: &'static str,
    },

    #[error("Unreadable timestamp '{value}' from {station}")]
    InvalidTimestamp { station: String, value: String },
}

impl StationError {
    pub fn station(&self) -> &str {
        match self {
            StationError::Network { station, .. }
            | StationError::Parse { station, .. }
            | StationError::Stale { station, .. }
            | StationError::MissingFields { station, .. }
            | StationError::InvalidTimestamp { station, .. } => station,
        }
    }

    /// Short label used in run summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            StationError::Network { .. } => "network",
            StationError::Parse { .. } => "parse",
            StationError::Stale { .. } => "stale",
            StationError::MissingFields { .. } => "missing-fields",
            StationError::InvalidTimestamp { .. } => "invalid-timestamp",
        }
    }
}
