use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("manifest not found: '{path}'")]
    NotFound { path: PathBuf },

    #[error("failed to read manifest '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("manifest is not valid JSON: {source}")]
    Decode { source: serde_json::Error },

    #[error("manifest has no '{0}' container")]
    MissingContainer(&'static str),

    #[error("invalid record #{index} in '{container}': {source}")]
    InvalidRecord {
        container: &'static str,
        index: usize,
        source: serde_json::Error,
    },

    #[error("group parent chain loops back to '{group_id}': {}", .chain.join(" -> "))]
    GroupCycle { group_id: String, chain: Vec<String> },

    #[error("group parent chain starting at '{group_id}' exceeds {limit} levels")]
    HierarchyTooDeep { group_id: String, limit: usize },

    #[error("path '{path}' escapes the archive root")]
    PathEscape { path: PathBuf },

    #[error("path '{path}' contains a NUL byte")]
    InvalidPath { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
