//! Re-materialize a Creative Cloud Library archive as a folder tree.
//!
//! One run goes through four stages: extract the archive into a scratch
//! directory, parse its manifest, resolve each element's group hierarchy,
//! and copy every component into `<library>_<YYYY-MM-DD>/<groups...>/`.

pub mod cli;
pub mod config;
mod driver;
mod error;
mod materialize;

pub use config::{DEFAULT_SCRATCH_DIR, ExtractorConfig, MaterializeOptions, output_dir_name};
pub use driver::{Extraction, run};
pub use error::{Error, Result};
pub use materialize::{CopiedFile, MaterializeReport, SkippedComponent, SkippedElement, materialize};
