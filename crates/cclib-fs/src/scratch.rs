use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Exclusively owned scratch directory, removed when released or dropped.
pub struct ScratchDir {
    path: PathBuf,
    released: bool,
}

impl ScratchDir {
    /// Create `path` as a fresh directory.
    ///
    /// Fails with [`Error::ScratchExists`] if anything is already there, so an
    /// unclean earlier run is never silently reused or clobbered.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            crate::ensure_dir(parent)?;
        }

        std::fs::create_dir(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => Error::ScratchExists { path: path.clone() },
            _ => Error::CreateDir {
                path: path.clone(),
                source: e,
            },
        })?;
        tracing::debug!(path = %path.display(), "created scratch directory");

        Ok(Self {
            path,
            released: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the directory and its contents, reporting failure.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        remove(&self.path)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if !self.released {
            if let Err(e) = remove(&self.path) {
                tracing::warn!(error = %e, "scratch directory was not removed");
            }
        }
    }
}

fn remove(path: &Path) -> Result<()> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed scratch directory");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Remove {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
