//! File-backed note storage.
//!
//! # Responsibility
//! - Serialize the whole collection to a single JSON file and back.
//! - Keep replacement of the persisted file atomic.
//!
//! # Invariants
//! - Writes go to a sibling temp file first, then rename over the target.
//! - A failed save leaves the previously saved file untouched.
//! - Load falls back to an empty collection on any read or parse failure.

use super::{NoteStore, StoreResult};
use crate::model::note::Note;
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Fixed file name used when a store is anchored to a data directory.
pub const NOTES_FILE_NAME: &str = "notes.json";

/// JSON-file implementation of [`NoteStore`].
///
/// The target path is explicit constructor state so tests can redirect
/// storage to a temporary location.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store writing to exactly `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store writing to the fixed notes file under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(NOTES_FILE_NAME))
    }

    /// Target file path of this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "notes.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl NoteStore for JsonFileStore {
    fn save(&mut self, notes: &[Note]) -> StoreResult<()> {
        let started_at = Instant::now();
        let result = write_atomic(&self.path, &self.temp_path(), notes);
        match &result {
            Ok(()) => info!(
                "event=store_save module=store status=ok path={} notes={} duration_ms={}",
                self.path.display(),
                notes.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_save module=store status=error path={} notes={} duration_ms={} error={}",
                self.path.display(),
                notes.len(),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn load(&self) -> Vec<Note> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "event=store_load module=store status=ok path={} notes=0 reason=missing_file",
                    self.path.display()
                );
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=recovered path={} reason=read_failed error={}",
                    self.path.display(),
                    err
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<Note>>(&bytes) {
            Ok(notes) => {
                info!(
                    "event=store_load module=store status=ok path={} notes={}",
                    self.path.display(),
                    notes.len()
                );
                notes
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=recovered path={} reason=parse_failed error={}",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }
}

fn write_atomic(target: &Path, temp: &Path, notes: &[Note]) -> StoreResult<()> {
    let encoded = serde_json::to_vec_pretty(notes)?;
    fs::write(temp, encoded)?;
    if let Err(err) = fs::rename(temp, target) {
        // Keep the previous persisted version; only the temp file is stale.
        let _ = fs::remove_file(temp);
        return Err(err.into());
    }
    Ok(())
}
