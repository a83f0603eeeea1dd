pub mod field_reconciler;
pub mod freshness_checker;
pub mod snapshot_collector;

pub use field_reconciler::FieldReconciler;
pub use freshness_checker::{Freshness, FreshnessChecker};
pub use snapshot_collector::{CollectionReport, SkippedStation, SnapshotCollector};
