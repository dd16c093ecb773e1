//! Filesystem primitives for re-materializing library assets.
//!
//! - `scratch.rs` - Exclusively owned scratch directory with guaranteed cleanup
//! - `naming.rs` - Collision-free destination names and path-segment sanitizing

mod error;
mod naming;
mod scratch;

pub use error::{Error, Result};
pub use naming::{sanitize_segment, unique_path};
pub use scratch::ScratchDir;

use std::fs::OpenOptions;
use std::path::Path;

/// Create `path` and all missing parents. Existing directories are fine.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path).map_err(|e| Error::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Copy the bytes of `src` into a new file at `dest`.
///
/// `dest` must not exist; the file is opened with `create_new`, so a target
/// that appeared after naming is reported instead of overwritten.
pub fn copy_new(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<u64> {
    let src = src.as_ref();
    let dest = dest.as_ref();
    let copy_err = |e| Error::Copy {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
        source: e,
    };

    let mut reader = std::fs::File::open(src).map_err(copy_err)?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .map_err(copy_err)?;
    let bytes = std::io::copy(&mut reader, &mut writer).map_err(copy_err)?;

    tracing::debug!(from = %src.display(), to = %dest.display(), bytes, "copied file");
    Ok(bytes)
}
