use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempDir;

use crate::domain::{AppError, RenderedArtifacts};

const SCRATCH_PREFIX: &str = "quicksvc-";

/// Process-exclusive build directory. Removed from disk when dropped.
#[derive(Debug)]
pub struct ScratchWorkspace {
    dir: TempDir,
}

impl ScratchWorkspace {
    /// Create a uniquely named directory under `parent`.
    pub fn create_in<P: AsRef<Path>>(parent: P) -> Result<Self, AppError> {
        let parent = parent.as_ref();
        let dir = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir_in(parent)
            .map_err(|e| AppError::artifact_write(parent, e))?;
        debug!("Created scratch directory {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write every artifact into the directory, returning the written paths.
    pub fn write(&self, artifacts: &RenderedArtifacts) -> Result<Vec<PathBuf>, AppError> {
        artifacts
            .files()
            .into_iter()
            .map(|(name, content)| {
                let path = self.path().join(name);
                fs::write(&path, content).map_err(|e| AppError::artifact_write(&path, e))?;
                debug!("Wrote {}", path.display());
                Ok(path)
            })
            .collect()
    }
}
