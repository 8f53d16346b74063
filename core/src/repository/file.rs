use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json;

use crate::model::snapshot::Snapshot;
use crate::repository::traits::SnapshotRepository;

/// Reads the JSON export of the data API from disk.
#[derive(Clone)]
pub struct FileSnapshotRepository {
    file_path: PathBuf,
}

impl FileSnapshotRepository {
    /// Opens `path`, creating its directory and an empty snapshot if the
    /// file does not exist yet.
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        if !path.exists() {
            log::info!("creating empty snapshot at {:?}", path);
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, &Snapshot::default())?;
            writer.flush()?;
        }

        Ok(FileSnapshotRepository { file_path: path.to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

}

impl SnapshotRepository for FileSnapshotRepository {
    fn load(&self) -> Result<Snapshot> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Failed to open snapshot: {:?}", self.file_path))?;
        let reader = BufReader::new(file);
        let snapshot: Snapshot = serde_json::from_reader(reader)
            .with_context(|| format!("Invalid snapshot JSON: {:?}", self.file_path))?;
        if snapshot.is_empty() {
            log::warn!("snapshot {:?} has no events or tasks", self.file_path);
        }
        log::info!(
            "loaded {} events and {} tasks from {:?}",
            snapshot.events.len(),
            snapshot.tasks.len(),
            self.file_path
        );
        Ok(snapshot)
    }
}
