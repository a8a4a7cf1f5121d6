//! Typed JSON file I/O with atomic replacement.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use orgtree_core::errors::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Serialize `value` to `path`, replacing any previous file atomically.
///
/// The data goes to a sibling `.tmp` file first and is renamed over the
/// target only once fully flushed, so readers never see a partial file.
pub fn write_atomic<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<(), StorageError> {
    let staged = stage(path, value, pretty)?;
    staged.commit()
}

/// A fully written and synced `.tmp` file waiting to be renamed over its target.
///
/// Dropping an uncommitted file removes the temp file.
#[derive(Debug)]
pub struct StagedFile {
    tmp_path: PathBuf,
    path: PathBuf,
    committed: bool,
}

impl StagedFile {
    /// Rename the temp file over the target.
    pub fn commit(mut self) -> Result<(), StorageError> {
        fs::rename(&self.tmp_path, &self.path).map_err(|e| io_error(&self.path, e))?;
        self.committed = true;
        debug!(path = %self.path.display(), "artifact written");
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.tmp_path);
        }
    }
}

/// Write `value` next to `path` without touching `path` itself.
pub fn stage<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<StagedFile, StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp_path)
        .map_err(|e| io_error(&tmp_path, e))?;

    // From here on a failure must not leave the temp file behind.
    let staged = StagedFile {
        tmp_path,
        path: path.to_path_buf(),
        committed: false,
    };
    let mut writer = BufWriter::new(file);

    let encoded = if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    };
    encoded.map_err(|e| StorageError::Serialize {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    writer
        .write_all(b"\n")
        .map_err(|e| io_error(&staged.tmp_path, e))?;

    let file = writer
        .into_inner()
        .map_err(|e| io_error(&staged.tmp_path, e.into_error()))?;
    file.sync_all().map_err(|e| io_error(&staged.tmp_path, e))?;

    Ok(staged)
}

/// Read a required artifact. A missing file is `MissingArtifact`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    match read_optional(path)? {
        Some(value) => Ok(value),
        None => Err(StorageError::MissingArtifact {
            path: path.display().to_string(),
        }),
    }
}

/// Read an optional artifact. A missing file is `Ok(None)`.
pub fn read_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error(path, e)),
    };

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| StorageError::Deserialize {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

fn io_error(path: &Path, e: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
