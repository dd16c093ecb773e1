#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Archive(#[from] cclib_archive::Error),

    #[error(transparent)]
    Manifest(#[from] cclib_manifest::Error),

    #[error(transparent)]
    FileSystem(#[from] cclib_fs::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
