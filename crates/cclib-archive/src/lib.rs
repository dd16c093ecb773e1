//! Archive extraction with path sanitization.
//!
//! # Architecture
//!
//! - `detect.rs` - Format detection from magic bytes
//! - `sanitize.rs` - Path sanitization (zip-slip prevention)
//! - `extract.rs` - Zip extraction into a destination directory
//! - `report.rs` - What was extracted

pub use detect::{ArchiveFormat, detect_format, detect_from_reader};
pub use error::{Error, Result};
pub use extract::{extract_archive, extract_from_reader};
pub use report::{ArchiveReport, ExtractedEntry};
pub use sanitize::{SanitizedPath, normalize_path, sanitize_path};

mod detect;
mod error;
mod extract;
mod report;
mod sanitize;
