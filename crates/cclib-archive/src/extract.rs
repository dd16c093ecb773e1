//! Zip extraction for `.cclibs` containers.
//!
//! Entries are streamed straight to disk. Every entry path goes through
//! [`sanitize_path`], so nothing is written outside the destination.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::detect::{ArchiveFormat, detect_from_reader};
use crate::error::{Error, Result};
use crate::report::{ArchiveReport, ExtractedEntry};
use crate::sanitize::sanitize_path;

/// Open the archive at `archive` and extract it into `destination`.
pub fn extract_archive(archive: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<ArchiveReport> {
    let archive = archive.as_ref();
    let file = File::open(archive).map_err(|e| Error::Open {
        path: archive.to_path_buf(),
        source: e,
    })?;
    tracing::info!(archive = %archive.display(), "opening archive");

    extract_from_reader(BufReader::new(file), destination.as_ref())
}

/// Extract archive with format detection.
///
/// Detects the archive format from the reader, rewinds it, and extracts all
/// entries under `destination`, preserving their relative paths.
pub fn extract_from_reader<R: Read + Seek>(mut reader: R, destination: &Path) -> Result<ArchiveReport> {
    let format = detect_from_reader(&mut reader)?.ok_or(Error::UnsupportedFormat)?;

    match format {
        ArchiveFormat::Zip => extract_zip(reader, destination),
    }
}

fn extract_zip<R: Read + Seek>(reader: R, destination: &Path) -> Result<ArchiveReport> {
    let mut archive = zip::ZipArchive::new(reader).map_err(Error::Corrupted)?;
    cclib_fs::ensure_dir(destination)?;

    let mut entries = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut file = archive.by_index(i).map_err(Error::Corrupted)?;

        let raw_path = file.enclosed_name().ok_or(Error::InvalidPath)?;
        let sanitized = sanitize_path(&raw_path, destination)?;
        let is_directory = file.is_dir();

        let size = if is_directory {
            cclib_fs::ensure_dir(&sanitized.resolved)?;
            0
        } else {
            write_file(&mut file, &sanitized.resolved)?
        };

        tracing::debug!(entry = %sanitized.original.display(), size, "extracted entry");

        entries.push(ExtractedEntry {
            original_path: sanitized.original,
            target_path: sanitized.resolved,
            size,
            is_directory,
        });
    }

    let report = ArchiveReport::new(ArchiveFormat::Zip, entries);
    tracing::info!(
        entries = report.entry_count,
        bytes = report.total_bytes,
        destination = %destination.display(),
        "extracted archive"
    );
    Ok(report)
}

fn write_file(reader: &mut impl Read, target_path: &Path) -> Result<u64> {
    if let Some(parent) = target_path.parent() {
        cclib_fs::ensure_dir(parent)?;
    }

    let extraction_failed = |e| Error::ExtractionFailed {
        path: target_path.to_path_buf(),
        source: e,
    };
    let mut out_file = File::create(target_path).map_err(extraction_failed)?;
    std::io::copy(reader, &mut out_file).map_err(extraction_failed)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use zip::write::SimpleFileOptions;

    use super::*;

    fn build_zip(files: &[(&str, &[u8])]) -> Cursor<Vec<u8>> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, content) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content).unwrap();
        }
        let mut cursor = writer.finish().unwrap();
        cursor.set_position(0);
        cursor
    }

    #[test]
    fn extract_from_reader_invalid_format() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF];
        let temp_dir = tempfile::tempdir().unwrap();
        let result = extract_from_reader(Cursor::new(data), temp_dir.path());
        assert!(matches!(result, Err(Error::UnsupportedFormat)));
    }

    #[test]
    fn extract_from_reader_empty_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = extract_from_reader(Cursor::new(Vec::new()), temp_dir.path());
        assert!(matches!(result, Err(Error::UnsupportedFormat)));
    }

    #[test]
    fn truncated_zip_is_corrupted() {
        let mut data = build_zip(&[("manifest", b"{}")]).into_inner();
        data.truncate(data.len() / 2);
        let temp_dir = tempfile::tempdir().unwrap();
        let result = extract_from_reader(Cursor::new(data), temp_dir.path());
        assert!(matches!(result, Err(Error::Corrupted(_))));
    }

    #[test]
    fn extract_nested_entries() {
        let cursor = build_zip(&[
            ("manifest", b"{\"name\":\"MyLib\"}"),
            ("e1dir/logo.png", &[0x89, 0x50, 0x4E, 0x47]),
            ("e1dir/deep/thumb.png", b"thumb"),
        ]);
        let temp_dir = tempfile::tempdir().unwrap();
        let dest = temp_dir.path().join("output");

        let report = extract_from_reader(cursor, &dest).unwrap();

        assert_eq!(report.entry_count, 3);
        assert_eq!(report.total_bytes, 16 + 4 + 5);
        assert_eq!(std::fs::read(dest.join("e1dir/logo.png")).unwrap(), [0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(std::fs::read(dest.join("e1dir/deep/thumb.png")).unwrap(), b"thumb");
        assert!(report.entries.iter().all(|e| e.target_path.starts_with(&dest)));
    }

    #[test]
    fn escaping_entry_is_rejected() {
        let cursor = build_zip(&[("../evil.txt", b"nope")]);
        let temp_dir = tempfile::tempdir().unwrap();
        let dest = temp_dir.path().join("output");

        let result = extract_from_reader(cursor, &dest);

        assert!(matches!(result, Err(Error::InvalidPath | Error::ZipSlip { .. })));
        assert!(!temp_dir.path().join("evil.txt").exists());
    }

    #[test]
    fn missing_archive_fails_to_open() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = extract_archive(temp_dir.path().join("absent.cclibs"), temp_dir.path());
        assert!(matches!(result, Err(Error::Open { .. })));
    }
}
