use std::path::PathBuf;

use crate::detect::ArchiveFormat;

#[derive(Clone, Debug)]
pub struct ArchiveReport {
    pub format: ArchiveFormat,
    pub entry_count: usize,
    pub total_bytes: u64,
    pub entries: Vec<ExtractedEntry>,
}

#[derive(Clone, Debug)]
pub struct ExtractedEntry {
    pub original_path: PathBuf,
    pub target_path: PathBuf,
    pub size: u64,
    pub is_directory: bool,
}

impl ArchiveReport {
    pub(crate) fn new(format: ArchiveFormat, entries: Vec<ExtractedEntry>) -> Self {
        Self {
            format,
            entry_count: entries.len(),
            total_bytes: entries.iter().map(|e| e.size).sum(),
            entries,
        }
    }

    /// Regular files only.
    pub fn files(&self) -> impl Iterator<Item = &ExtractedEntry> {
        self.entries.iter().filter(|e| !e.is_directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, size: u64, is_directory: bool) -> ExtractedEntry {
        ExtractedEntry {
            original_path: PathBuf::from(path),
            target_path: PathBuf::from("/scratch").join(path),
            size,
            is_directory,
        }
    }

    #[test]
    fn archive_report_totals() {
        let report = ArchiveReport::new(
            ArchiveFormat::Zip,
            vec![
                entry("manifest", 120, false),
                entry("e1dir", 0, true),
                entry("e1dir/logo.png", 4096, false),
            ],
        );
        assert_eq!(report.format, ArchiveFormat::Zip);
        assert_eq!(report.entry_count, 3);
        assert_eq!(report.total_bytes, 4216);
        assert_eq!(report.files().count(), 2);
    }

    #[test]
    fn empty_report() {
        let report = ArchiveReport::new(ArchiveFormat::Zip, Vec::new());
        assert_eq!(report.entry_count, 0);
        assert_eq!(report.total_bytes, 0);
        assert!(report.entries.is_empty());
    }
}
