pub mod json_writer;
pub mod publisher;

pub use json_writer::{JsonWriter, SnapshotFileInfo};
pub use publisher::publish;
