//! Copy every element's components into the group folder tree.
//!
//! Missing element directories and missing component files are skipped, not
//! failed on; each skip is logged and recorded in the [`MaterializeReport`].

use std::path::{Path, PathBuf};

use cclib_fs::{copy_new, ensure_dir, sanitize_segment, unique_path};
use cclib_manifest::{Element, GroupIndex, Manifest};

use crate::config::MaterializeOptions;
use crate::error::Result;

#[derive(Clone, Debug, Default)]
pub struct MaterializeReport {
    pub copied: Vec<CopiedFile>,
    pub skipped_elements: Vec<SkippedElement>,
    pub skipped_components: Vec<SkippedComponent>,
}

#[derive(Clone, Debug)]
pub struct CopiedFile {
    pub element_id: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// An element whose source directory was not in the archive.
#[derive(Clone, Debug)]
pub struct SkippedElement {
    pub element_id: String,
    pub name: String,
    pub source: PathBuf,
}

/// A component whose source file was not in the archive.
#[derive(Clone, Debug)]
pub struct SkippedComponent {
    pub element_id: String,
    pub component: String,
    pub source: PathBuf,
}

impl MaterializeReport {
    pub fn total_bytes(&self) -> u64 {
        self.copied.iter().map(|c| c.bytes).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.skipped_elements.is_empty() && self.skipped_components.is_empty()
    }
}

/// Populate `destination` from the extracted archive at `archive_root`.
///
/// The destination tree is created as needed; existing directories and
/// files are kept, and new files never replace them.
pub fn materialize(
    manifest: &Manifest,
    archive_root: &Path,
    destination: &Path,
    options: &MaterializeOptions,
) -> Result<MaterializeReport> {
    let index = GroupIndex::new(&manifest.groups).max_depth(options.max_group_depth);
    let mut report = MaterializeReport::default();

    ensure_dir(destination)?;

    for element in &manifest.elements {
        materialize_element(element, &index, archive_root, destination, &mut report)?;
    }

    tracing::info!(
        copied = report.copied.len(),
        bytes = report.total_bytes(),
        skipped_elements = report.skipped_elements.len(),
        skipped_components = report.skipped_components.len(),
        destination = %destination.display(),
        "materialized library"
    );
    Ok(report)
}

fn materialize_element(
    element: &Element,
    index: &GroupIndex<'_>,
    archive_root: &Path,
    destination: &Path,
    report: &mut MaterializeReport,
) -> Result<()> {
    let element_dir = resolve_within(Path::new(&element.path), archive_root)?;
    if !element_dir.is_dir() {
        tracing::warn!(
            element = %element.id,
            name = %element.name,
            path = %element_dir.display(),
            "element directory missing, skipping"
        );
        report.skipped_elements.push(SkippedElement {
            element_id: element.id.clone(),
            name: element.name.clone(),
            source: element_dir,
        });
        return Ok(());
    }

    let folder = index
        .hierarchy(element)?
        .iter()
        .fold(destination.to_path_buf(), |path, segment| path.join(&*sanitize_segment(segment)));
    ensure_dir(&folder)?;

    for component in &element.components {
        let dest = unique_path(folder.join(destination_file_name(&element.name, &component.name)));
        // Relative to the element directory; may reach siblings inside the archive.
        let source = resolve_within(&Path::new(&element.path).join(&component.path), archive_root)?;

        if !source.is_file() {
            tracing::warn!(
                element = %element.id,
                component = %component.name,
                path = %source.display(),
                "component file missing, skipping"
            );
            report.skipped_components.push(SkippedComponent {
                element_id: element.id.clone(),
                component: component.name.clone(),
                source,
            });
            continue;
        }

        let bytes = copy_new(&source, &dest)?;
        report.copied.push(CopiedFile {
            element_id: element.id.clone(),
            source,
            destination: dest,
            bytes,
        });
    }

    Ok(())
}

/// `<element name><extension of the component name>`, as one path segment.
fn destination_file_name(element_name: &str, component_name: &str) -> String {
    let ext = Path::new(component_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    sanitize_segment(&format!("{element_name}{ext}")).into_owned()
}

fn resolve_within(relative: &Path, base: &Path) -> Result<PathBuf> {
    match cclib_archive::sanitize_path(relative, base) {
        Ok(sanitized) => Ok(sanitized.resolved),
        Err(cclib_archive::Error::ZipSlip { .. }) => Err(cclib_manifest::Error::PathEscape {
            path: relative.to_path_buf(),
        }
        .into()),
        Err(cclib_archive::Error::InvalidPath) => Err(cclib_manifest::Error::InvalidPath {
            path: relative.to_path_buf(),
        }
        .into()),
        Err(other) => Err(other.into()),
    }
}
