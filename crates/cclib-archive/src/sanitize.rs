use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Result of sanitizing a relative path against a base directory.
#[derive(Clone, Debug)]
pub struct SanitizedPath {
    pub original: PathBuf,
    pub resolved: PathBuf,
}

/// Resolve `entry_path` under `base`, rejecting anything that would land
/// outside of it.
///
/// Resolution is lexical: `..` components are folded before the containment
/// check, so `a/../b` is accepted while `../b` and absolute paths are not.
pub fn sanitize_path<P: AsRef<Path>, B: AsRef<Path>>(entry_path: P, base: B) -> Result<SanitizedPath> {
    let entry_path = entry_path.as_ref();
    let base = normalize_path(base.as_ref());

    if entry_path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(Error::InvalidPath);
    }

    let normalized = normalize_path(entry_path);

    // Reject absolute paths and leading `..` (zip-slip protection)
    if normalized.has_root() || normalized.starts_with(Component::ParentDir) {
        return Err(Error::ZipSlip {
            entry: entry_path.to_path_buf(),
            resolved: normalized,
        });
    }

    let resolved = normalize_path(&base.join(entry_path));

    if !resolved.starts_with(&base) {
        return Err(Error::ZipSlip {
            entry: entry_path.to_path_buf(),
            resolved,
        });
    }

    Ok(SanitizedPath {
        original: entry_path.to_path_buf(),
        resolved,
    })
}

/// Fold `.` and `..` components without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            // `..` past the start of a relative path is kept so the
            // containment check sees it.
            Component::ParentDir => match result.components().next_back() {
                Some(Component::Normal(_)) => {
                    result.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => result.push(".."),
            },
            Component::Normal(part) => result.push(part),
            Component::RootDir => result.push(component.as_os_str()),
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::CurDir => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_base_path() -> &'static Path {
        if cfg!(windows) {
            Path::new("C:/scratch")
        } else {
            Path::new("/scratch")
        }
    }

    #[test]
    fn basic_path_sanitization() {
        let result = sanitize_path("e1dir/logo.png", test_base_path()).unwrap();
        assert_eq!(result.original, Path::new("e1dir/logo.png"));
        assert_eq!(result.resolved, test_base_path().join("e1dir/logo.png"));
    }

    #[test]
    fn inner_parent_dir_is_folded() {
        let result = sanitize_path("e1dir/../e2dir/a.svg", test_base_path()).unwrap();
        assert_eq!(result.resolved, test_base_path().join("e2dir/a.svg"));
    }

    #[test]
    fn zip_slip_protection() {
        let result = sanitize_path("../../etc/passwd", test_base_path());
        assert!(matches!(result, Err(Error::ZipSlip { .. })));
    }

    #[test]
    fn absolute_path_rejected() {
        let malicious_path = if cfg!(windows) { "C:\\etc\\passwd" } else { "/etc/passwd" };
        let result = sanitize_path(malicious_path, test_base_path());
        assert!(matches!(result, Err(Error::ZipSlip { .. })));
    }

    #[test]
    fn relative_base() {
        let result = sanitize_path("e1dir", "temp_cclib_extract").unwrap();
        assert_eq!(result.resolved, Path::new("temp_cclib_extract/e1dir"));

        let escaped = sanitize_path("../sibling", "temp_cclib_extract");
        assert!(matches!(escaped, Err(Error::ZipSlip { .. })));

        let prefix_sibling = sanitize_path("../temp_cclib_extract2/x", "temp_cclib_extract");
        assert!(matches!(prefix_sibling, Err(Error::ZipSlip { .. })));
    }

    #[test]
    fn empty_base_still_contains() {
        assert!(sanitize_path("e1dir", "").is_ok());
        let result = sanitize_path("a/../../b", "");
        assert!(matches!(result, Err(Error::ZipSlip { .. })));
    }

    #[test]
    fn path_normalization() {
        assert_eq!(normalize_path(Path::new("foo/./bar/../qux")), Path::new("foo/qux"));
        assert_eq!(normalize_path(Path::new("../a")), Path::new("../a"));
        assert_eq!(normalize_path(Path::new("../../a")), Path::new("../../a"));
        assert_eq!(normalize_path(Path::new("/../a")), Path::new("/a"));
        assert_eq!(normalize_path(Path::new("./")), Path::new(""));
    }

    #[test]
    fn null_byte_rejected() {
        let result = sanitize_path("bad\0name", test_base_path());
        assert!(matches!(result, Err(Error::InvalidPath)));
    }
}
