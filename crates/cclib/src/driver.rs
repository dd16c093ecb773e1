use std::path::{Path, PathBuf};

use cclib_archive::ArchiveReport;
use cclib_fs::ScratchDir;

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::materialize::{MaterializeReport, materialize};

/// Outcome of a completed run.
#[derive(Clone, Debug)]
pub struct Extraction {
    pub output_dir: PathBuf,
    pub library_name: String,
    pub archive: ArchiveReport,
    pub report: MaterializeReport,
}

/// Extract `archive` and materialize it under `config.work_dir`.
///
/// The scratch directory is created first and removed on every exit path.
/// If both a stage and the cleanup fail, the stage error is returned and the
/// cleanup error is logged.
pub fn run(archive: impl AsRef<Path>, config: &ExtractorConfig) -> Result<Extraction> {
    let scratch = ScratchDir::create(config.scratch_path())?;

    let result = run_stages(archive.as_ref(), scratch.path(), config);
    let released = scratch.release();

    match (result, released) {
        (Ok(extraction), Ok(())) => Ok(extraction),
        (Ok(_), Err(cleanup)) => Err(cleanup.into()),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(cleanup)) => {
            tracing::warn!(error = %cleanup, "scratch cleanup failed after an earlier error");
            Err(e)
        }
    }
}

fn run_stages(archive: &Path, scratch: &Path, config: &ExtractorConfig) -> Result<Extraction> {
    let archive_report = cclib_archive::extract_archive(archive, scratch)?;
    let manifest = cclib_manifest::parse_manifest(scratch)?;

    let library_name = manifest.library_name().to_owned();
    let output_dir = config.output_path(&library_name);
    tracing::info!(library = %library_name, output = %output_dir.display(), "materializing");

    let report = materialize(&manifest, scratch, &output_dir, &config.materialize)?;

    Ok(Extraction {
        output_dir,
        library_name,
        archive: archive_report,
        report,
    })
}
