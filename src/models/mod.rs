pub mod block;
pub mod reading;
pub mod snapshot;
pub mod station;

pub use block::{BlockKind, FieldBlock};
pub use reading::Reading;
pub use snapshot::{Snapshot, SnapshotMetadata};
pub use station::StationConfig;
