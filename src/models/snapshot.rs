use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::reading::Reading;
use crate::utils::constants::TIMESTAMP_FORMAT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    #[serde(rename = "fuente")]
    pub source: String,

    /// dd/mm/yyyy HH:MM in the run's timezone
    #[serde(rename = "fecha_generacion")]
    pub generated_at: String,

    #[serde(rename = "numero_estaciones")]
    pub station_count: usize,
}

/// Complete output document for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub metadata: SnapshotMetadata,

    #[serde(rename = "datos")]
    pub readings: Vec<Reading>,
}

impl Snapshot {
    /// Wrap accepted readings (already in registry order) with the metadata header.
    pub fn assemble(source: &str, generated_at: DateTime<Tz>, readings: Vec<Reading>) -> Self {
        Self {
            metadata: SnapshotMetadata {
                source: source.to_string(),
                generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
                station_count: readings.len(),
            },
            readings,
        }
    }

    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.readings.iter().map(|r| r.station_name.as_str())
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Snapshot from {} generated {}: {} station(s)",
            self.metadata.source, self.metadata.generated_at, self.metadata.station_count
        );
        for reading in &self.readings {
            summary.push_str(&format!(
                "\n  {} ({}, {}) at {}: temperatura={} humedad={}",
                reading.station_name,
                reading.latitude,
                reading.longitude,
                reading.declared_timestamp(),
                reading.current.value("temperatura").unwrap_or("-"),
                reading.current.value("humedad").unwrap_or("-"),
            ));
        }
        summary
    }
}
