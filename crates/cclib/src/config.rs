use std::path::PathBuf;

use cclib_manifest::DEFAULT_MAX_DEPTH;
use chrono::NaiveDate;

/// Scratch directory name, created next to the output directory.
pub const DEFAULT_SCRATCH_DIR: &str = "temp_cclib_extract";

#[derive(Clone, Debug)]
pub struct ExtractorConfig {
    /// Directory that receives the scratch and output directories.
    /// Empty means the current directory.
    pub work_dir: PathBuf,
    pub scratch_name: String,
    /// Date stamped on the output directory; today when unset.
    pub date: Option<NaiveDate>,
    pub materialize: MaterializeOptions,
}

#[derive(Clone, Copy, Debug)]
pub struct MaterializeOptions {
    pub max_group_depth: usize,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self {
            max_group_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::new(),
            scratch_name: DEFAULT_SCRATCH_DIR.to_owned(),
            date: None,
            materialize: MaterializeOptions::default(),
        }
    }
}

impl ExtractorConfig {
    pub fn work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    pub fn scratch_name(mut self, name: impl Into<String>) -> Self {
        self.scratch_name = name.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn max_group_depth(mut self, depth: usize) -> Self {
        self.materialize.max_group_depth = depth;
        self
    }

    pub fn scratch_path(&self) -> PathBuf {
        self.work_dir.join(&self.scratch_name)
    }

    pub fn output_path(&self, library_name: &str) -> PathBuf {
        let date = self.date.unwrap_or_else(|| chrono::Local::now().date_naive());
        self.work_dir.join(output_dir_name(library_name, date))
    }
}

/// `<library>_<YYYY-MM-DD>`, with the library name made safe as a single
/// path segment.
pub fn output_dir_name(library_name: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}",
        cclib_fs::sanitize_segment(library_name),
        date.format("%Y-%m-%d")
    )
}
