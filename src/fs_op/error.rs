use thiserror::Error;
use std::path::PathBuf;

/// Errors produced by the filesystem helpers used during generation.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// The directory to list does not exist.
    #[error("directory does not exist: `{0}`")]
    NotFound(PathBuf),

    /// The path exists but is not a directory.
    #[error("not a directory: `{0}`")]
    NotADirectory(PathBuf),

    /// Listing or writing failed with an underlying IO error.
    #[error("I/O error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry whose name is not valid UTF-8.
    #[error("file name is not valid UTF-8: `{0}`")]
    InvalidFileName(PathBuf),
}

impl FsOpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FsOpError::Io {
            path: path.into(),
            source,
        }
    }
}
