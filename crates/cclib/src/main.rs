use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cclib::ExtractorConfig;
use cclib::cli::App;

/// Logs go to stderr; stdout carries only the output directory.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("cclib=info,cclib_archive=info,cclib_manifest=info,cclib_fs=info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let app = App::parse();
    init_tracing();

    let extraction = cclib::run(&app.archive, &ExtractorConfig::default())
        .with_context(|| format!("failed to extract '{}'", app.archive.display()))?;

    let report = &extraction.report;
    if !report.is_complete() {
        tracing::warn!(
            skipped_elements = report.skipped_elements.len(),
            skipped_components = report.skipped_components.len(),
            "some assets were missing from the archive"
        );
    }
    tracing::info!(
        library = %extraction.library_name,
        files = report.copied.len(),
        bytes = report.total_bytes(),
        "extraction complete"
    );

    println!("{}", extraction.output_dir.display());
    Ok(())
}
