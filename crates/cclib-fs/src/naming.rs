use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Return `candidate` if nothing exists there, otherwise the first free
/// `<stem>_<n><.ext>` next to it, counting from 1.
///
/// Existing files are respected, so the counter continues past names taken
/// by earlier runs or by files that were already present.
pub fn unique_path(candidate: impl AsRef<Path>) -> PathBuf {
    let candidate = candidate.as_ref();
    if !occupied(candidate) {
        return candidate.to_path_buf();
    }

    let stem = candidate.file_stem().map(OsString::from).unwrap_or_default();
    let ext = candidate.extension();

    (1u64..)
        .map(|n| {
            let mut name = stem.clone();
            name.push(format!("_{n}"));
            if let Some(ext) = ext {
                name.push(".");
                name.push(ext);
            }
            candidate.with_file_name(name)
        })
        .find(|path| !occupied(path))
        .unwrap_or_else(|| candidate.to_path_buf())
}

// Dangling symlinks count as taken.
fn occupied(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Make a display name usable as a single path segment.
///
/// Separators become `_`, and empty, `.` and `..` segments become `_`.
/// Everything else passes through unchanged.
pub fn sanitize_segment(name: &str) -> Cow<'_, str> {
    match name {
        "" | "." | ".." => Cow::Borrowed("_"),
        _ if name.contains(['/', '\\', '\0']) => Cow::Owned(name.replace(['/', '\\', '\0'], "_")),
        _ => Cow::Borrowed(name),
    }
}
