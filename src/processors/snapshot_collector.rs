use chrono::DateTime;
use chrono_tz::Tz;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::{Result, StationError};
use crate::models::{BlockKind, Reading, Snapshot, StationConfig};
use crate::processors::field_reconciler::FieldReconciler;
use crate::processors::freshness_checker::{Freshness, FreshnessChecker};
use crate::readers::{StationDocument, StationFetcher};
use crate::utils::constants::{DATE_ELEMENT, TIME_ELEMENT};
use crate::utils::progress::ProgressReporter;

/// A station left out of the snapshot and why.
#[derive(Debug)]
pub struct SkippedStation {
    pub name: String,
    pub error: StationError,
}

/// Result of one pass over the registry.
#[derive(Debug)]
pub struct CollectionReport {
    pub snapshot: Snapshot,
    pub skipped: Vec<SkippedStation>,
}

impl CollectionReport {
    pub fn accepted_count(&self) -> usize {
        self.snapshot.readings.len()
    }

    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Station Collection Report\n");
        summary.push_str("=========================\n");
        summary.push_str(&format!("Generated: {}\n", self.snapshot.metadata.generated_at));
        summary.push_str(&format!(
            "Stations: {} accepted, {} skipped\n",
            self.accepted_count(),
            self.skipped.len()
        ));

        for skipped in &self.skipped {
            summary.push_str(&format!(
                "  [{}] {}: {}\n",
                skipped.error.kind(),
                skipped.name,
                skipped.error
            ));
        }

        summary
    }
}

/// Walks the registry one station at a time and assembles the snapshot.
pub struct SnapshotCollector<F> {
    fetcher: F,
    checker: FreshnessChecker,
    reconciler: FieldReconciler,
    namespace: String,
    source_label: String,
}

impl<F: StationFetcher> SnapshotCollector<F> {
    pub fn new(fetcher: F, settings: &Settings) -> Result<Self> {
        Ok(Self {
            fetcher,
            checker: FreshnessChecker::new(settings.freshness_window(), settings.tz()?),
            reconciler: FieldReconciler::new(),
            namespace: settings.namespace.clone(),
            source_label: settings.source_label.clone(),
        })
    }

    /// Process every station in order. Per-station failures are logged and
    /// recorded; they never abort the run.
    pub async fn collect(
        &self,
        stations: &[StationConfig],
        now: DateTime<Tz>,
        progress: Option<&ProgressReporter>,
    ) -> CollectionReport {
        let mut readings = Vec::with_capacity(stations.len());
        let mut skipped = Vec::new();

        for station in stations {
            if let Some(p) = progress {
                p.set_message(&station.name);
            }

            match self.process_station(station, now).await {
                Ok(reading) => {
                    debug!(station = %station.name, declared = %reading.declared_timestamp(), "Reading accepted");
                    readings.push(reading);
                }
                Err(error) => {
                    warn!("{}", error);
                    skipped.push(SkippedStation {
                        name: station.name.clone(),
                        error,
                    });
                }
            }

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        info!(
            accepted = readings.len(),
            skipped = skipped.len(),
            "Finished polling stations"
        );

        CollectionReport {
            snapshot: Snapshot::assemble(&self.source_label, now, readings),
            skipped,
        }
    }

    /// Fetch, parse, normalize and freshness-check a single station.
    pub async fn process_station(
        &self,
        station: &StationConfig,
        now: DateTime<Tz>,
    ) -> std::result::Result<Reading, StationError> {
        let body = self
            .fetcher
            .fetch(&station.url)
            .await
            .map_err(|source| StationError::Network {
                station: station.name.clone(),
                source,
            })?;

        let document = StationDocument::parse(&body, &self.namespace).map_err(|source| {
            StationError::Parse {
                station: station.name.clone(),
                source,
            }
        })?;

        self.build_reading(station, &document, now)
    }

    /// Turn a parsed document into an accepted reading, or say why not.
    pub fn build_reading(
        &self,
        station: &StationConfig,
        document: &StationDocument,
        now: DateTime<Tz>,
    ) -> std::result::Result<Reading, StationError> {
        let missing = |field: &'static str| StationError::MissingFields {
            station: station.name.clone(),
            field,
        };
        let date = document.root_text(DATE_ELEMENT).ok_or_else(|| missing(DATE_ELEMENT))?;
        let time = document.root_text(TIME_ELEMENT).ok_or_else(|| missing(TIME_ELEMENT))?;
        let date = date.unwrap_or_default();
        let time = time.unwrap_or_default();

        match self.checker.check(&date, &time, now) {
            Freshness::Fresh => {}
            Freshness::Stale { age } => {
                return Err(StationError::Stale {
                    station: station.name.clone(),
                    reported: format!("{} {}", date, time),
                    age_minutes: age.num_minutes(),
                });
            }
            Freshness::Unreadable => {
                return Err(StationError::InvalidTimestamp {
                    station: station.name.clone(),
                    value: format!("{} {}", date, time),
                });
            }
        }

        let mut reading = Reading::new(station, date, time);
        for kind in BlockKind::ALL {
            let mut block = document.extract_block(kind);
            self.reconciler.reconcile(kind, &mut block);
            *reading.block_mut(kind) = block;
        }

        Ok(reading)
    }
}
