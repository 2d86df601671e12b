use crate::error::MinimalWaveError;
use crate::identifier::Identifier;
use digest::Digest;
use eyre::{Result, WrapErr};
use md5::Md5;
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const CACHE_EXTENSION: &str = "mp3";
pub const TEMP_EXTENSION: &str = "tmp";
pub const TEMP_PREFIX: &str = "minimalwave-";

/// Files left behind by runs that never finalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PurgeReport {
    pub removed: usize,
    pub failed: usize,
}

/// Per-user directory holding finalized recordings (`<md5>.mp3`) and the
/// in-flight temporary files (`minimalwave-*.mp3.tmp`). Both live in the same
/// directory so that finalizing is a same-filesystem rename.
#[derive(Clone, Debug)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the cache directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, MinimalWaveError> {
        let store = Self::new(dir);
        std::fs::create_dir_all(&store.dir).map_err(|e| MinimalWaveError::CacheDirectory {
            path: store.dir.clone(),
            reason: e.to_string(),
        })?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Canonical location of a finalized recording. Pure, no I/O.
    pub fn path_for(&self, identifier: &Identifier) -> PathBuf {
        let hash = hex::encode(Md5::digest(identifier.as_str().as_bytes()));
        self.dir.join(format!("{hash}.{CACHE_EXTENSION}"))
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    pub fn is_temporary(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == TEMP_EXTENSION)
    }

    /// The returned file is removed when its handle (or its `TempPath`) drops.
    pub fn create_temp_file(&self) -> Result<NamedTempFile, MinimalWaveError> {
        tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(&format!(".{CACHE_EXTENSION}.{TEMP_EXTENSION}"))
            .tempfile_in(&self.dir)
            .map_err(|e| MinimalWaveError::TemporaryFile {
                path: self.dir.clone(),
                reason: e.to_string(),
            })
    }

    /// Copies a completed download onto its canonical path.
    ///
    /// The copy is staged in a second temporary file and renamed into place,
    /// so `cache_path` never holds a partial file. The source is left untouched
    /// because a player may still be reading it.
    pub fn finalize(&self, temp_path: &Path, cache_path: &Path) -> Result<u64, MinimalWaveError> {
        let cache_error = |reason: String| MinimalWaveError::CacheWrite {
            path: cache_path.to_path_buf(),
            reason,
        };

        let mut source = File::open(temp_path)
            .map_err(|e| cache_error(format!("open {}: {e}", temp_path.display())))?;
        let mut staged = self
            .create_temp_file()
            .map_err(|e| cache_error(e.to_string()))?;

        let copied = std::io::copy(&mut source, staged.as_file_mut())
            .map_err(|e| cache_error(e.to_string()))?;
        staged
            .as_file()
            .sync_all()
            .map_err(|e| cache_error(e.to_string()))?;
        staged
            .persist(cache_path)
            .map_err(|e| cache_error(e.error.to_string()))?;

        tracing::debug!(
            source = %temp_path.display(),
            target = %cache_path.display(),
            bytes = copied,
            "Finalized cache entry"
        );
        Ok(copied)
    }

    /// Removes every temporary file in the cache directory. Individual removal
    /// failures are logged and counted; only an unreadable directory is an error.
    pub fn purge_orphans(&self) -> Result<PurgeReport> {
        let mut report = PurgeReport::default();
        for path in self.files()? {
            if !Self::is_temporary(&path) {
                continue;
            }
            match std::fs::remove_file(&path) {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "Removed orphaned temporary file");
                    report.removed += 1;
                }
                Err(err) => {
                    tracing::warn!("failed to remove temp file {}: {}", path.display(), err);
                    report.failed += 1;
                }
            }
        }
        Ok(report)
    }

    /// Removes all finalized recordings.
    pub fn clear_entries(&self) -> Result<usize> {
        let mut removed = 0;
        for path in self.files()? {
            if path.extension().is_some_and(|ext| ext == CACHE_EXTENSION) {
                std::fs::remove_file(&path)
                    .wrap_err_with(|| format!("Failed to remove {}", path.display()))?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn files(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.dir)
            .wrap_err_with(|| format!("Failed to read cache directory: {}", self.dir.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.wrap_err_with(|| {
                format!("Failed to read entry in {}", self.dir.display())
            })?;
            if entry.file_type().is_ok_and(|t| t.is_file()) {
                files.push(entry.path());
            }
        }
        Ok(files)
    }
}
