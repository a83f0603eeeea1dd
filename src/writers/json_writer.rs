use crate::error::{ProcessingError, Result};
use crate::models::Snapshot;
use crate::utils::constants::JSON_INDENT;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Writes snapshots as indented UTF-8 JSON. Non-ASCII text is written verbatim.
pub struct JsonWriter {
    indent: Vec<u8>,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self {
            indent: JSON_INDENT.to_vec(),
        }
    }

    pub fn with_indent(mut self, spaces: usize) -> Self {
        self.indent = vec![b' '; spaces];
        self
    }

    /// Serialize to an in-memory buffer
    pub fn to_vec(&self, snapshot: &Snapshot) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        snapshot.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Write the snapshot to `path`, replacing whatever was there.
    pub fn write_snapshot(&self, snapshot: &Snapshot, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = self.to_vec(snapshot)?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(&bytes)?;
        writer.flush()?;

        Ok(())
    }

    pub fn read_snapshot(&self, path: &Path) -> Result<Snapshot> {
        let reader = BufReader::new(File::open(path)?);
        let snapshot: Snapshot = serde_json::from_reader(reader)?;

        if snapshot.metadata.station_count != snapshot.readings.len() {
            return Err(ProcessingError::Config(format!(
                "{}: numero_estaciones is {} but datos holds {} readings",
                path.display(),
                snapshot.metadata.station_count,
                snapshot.readings.len()
            )));
        }

        Ok(snapshot)
    }

    /// Get file statistics
    pub fn get_file_info(&self, path: &Path) -> Result<SnapshotFileInfo> {
        let snapshot = self.read_snapshot(path)?;
        let file_size = fs::metadata(path)?.len();
        let populated_fields = snapshot
            .readings
            .iter()
            .map(|r| {
                r.current.populated_count()
                    + r.daily.populated_count()
                    + r.monthly.populated_count()
                    + r.yearly.populated_count()
                    + r.astronomy.populated_count()
            })
            .sum();

        Ok(SnapshotFileInfo {
            source: snapshot.metadata.source,
            generated_at: snapshot.metadata.generated_at,
            station_count: snapshot.metadata.station_count,
            populated_fields,
            file_size,
        })
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct SnapshotFileInfo {
    pub source: String,
    pub generated_at: String,
    pub station_count: usize,
    pub populated_fields: usize,
    pub file_size: u64,
}

impl SnapshotFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "Snapshot File Summary:\n\
            - Source: {}\n\
            - Generated: {}\n\
            - Stations: {}\n\
            - Populated fields: {}\n\
            - File size: {:.1} KB",
            self.source,
            self.generated_at,
            self.station_count,
            self.populated_fields,
            self.file_size as f64 / 1024.0
        )
    }
}
