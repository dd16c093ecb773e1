use std::path::Path;

use crate::error::{Error, Result};
use crate::schema::Manifest;

/// File name of the manifest at the root of an extracted archive.
pub const MANIFEST_FILE: &str = "manifest";

/// Read and decode `<dir>/manifest`.
pub fn parse_manifest(dir: impl AsRef<Path>) -> Result<Manifest> {
    let path = dir.as_ref().join(MANIFEST_FILE);

    let json = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound { path: path.clone() },
        _ => Error::Read {
            path: path.clone(),
            source: e,
        },
    })?;

    let manifest = Manifest::from_json_str(&json)?;
    tracing::info!(
        library = manifest.library_name(),
        groups = manifest.groups.len(),
        elements = manifest.elements.len(),
        "parsed manifest"
    );
    Ok(manifest)
}
