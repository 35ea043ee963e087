//! Scoped scratch directory for intermediate files.

use std::path::Path;

use anyhow::{Context, Result};
use tempfile::{NamedTempFile, TempDir};
use tracing::{debug, info};

/// A temporary directory removed when dropped, on success or failure,
/// unless it was created with `keep` set.
pub struct Scratch {
    dir: Option<TempDir>,
    keep: bool,
}

impl Scratch {
    /// Creates a fresh scratch directory inside `parent`.
    ///
    /// Files staged here live on the same filesystem as `parent`, so they
    /// can be persisted into it with an atomic rename.
    pub fn new_in(parent: &Path, keep: bool) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(".almanac-")
            .tempdir_in(parent)
            .with_context(|| {
                format!("failed to create scratch directory in {}", parent.display())
            })?;
        debug!(path = %dir.path().display(), keep, "created scratch directory");
        Ok(Self {
            dir: Some(dir),
            keep,
        })
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Path {
        self.dir.as_ref().map_or(Path::new(""), TempDir::path)
    }

    /// Creates an empty staging file inside the scratch directory.
    pub fn stage(&self) -> Result<NamedTempFile> {
        NamedTempFile::new_in(self.path()).with_context(|| {
            format!("failed to create scratch file in {}", self.path().display())
        })
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };
        if self.keep {
            let path = dir.keep();
            info!(path = %path.display(), "keeping scratch directory");
        } else {
            debug!(path = %dir.path().display(), "removing scratch directory");
        }
    }
}
