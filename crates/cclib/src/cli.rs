use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(name = "cclib", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Path to the .cclibs archive
    pub archive: PathBuf,
}
