use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ProcessingError, Result};

/// Copy a written snapshot into each downstream directory.
///
/// Directories that do not exist are skipped with a warning. Returns the
/// paths that were written.
pub fn publish(snapshot_path: &Path, dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let file_name = snapshot_path.file_name().ok_or_else(|| {
        ProcessingError::Config(format!(
            "snapshot path has no file name: {}",
            snapshot_path.display()
        ))
    })?;

    let mut published = Vec::with_capacity(dirs.len());
    for dir in dirs {
        if !dir.is_dir() {
            warn!("Publish directory {} does not exist, skipping", dir.display());
            continue;
        }

        let target = dir.join(file_name);
        fs::copy(snapshot_path, &target)?;
        info!("Snapshot copied to {}", target.display());
        published.push(target);
    }

    Ok(published)
}
