use std::path::PathBuf;

use thiserror::Error;

use crate::fs_op::FsOpError;
use crate::render::RenderError;

/// Failures of a generation run. Every variant aborts the run before any XML
/// is emitted.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read directory {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory exists but holds no regular files. Reported as a
    /// warning rather than a hard error.
    #[error("no files found in directory: {}", .0.display())]
    EmptyDirectory(PathBuf),

    #[error("file name is not valid UTF-8: {}", .0.display())]
    InvalidFileName(PathBuf),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: FsOpError,
    },

    #[error("invalid settings: {0}")]
    Settings(String),
}

impl GenerateError {
    /// `true` for conditions reported as warnings.
    pub fn is_warning(&self) -> bool {
        matches!(self, GenerateError::EmptyDirectory(_))
    }

    /// Process exit code for this failure: 2 for warnings, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_warning() {
            2
        } else {
            1
        }
    }
}

impl From<FsOpError> for GenerateError {
    fn from(err: FsOpError) -> Self {
        match err {
            FsOpError::NotFound(path) => GenerateError::DirectoryNotFound(path),
            FsOpError::NotADirectory(path) => GenerateError::NotADirectory(path),
            FsOpError::Io { path, source } => GenerateError::Read { path, source },
            FsOpError::InvalidFileName(path) => GenerateError::InvalidFileName(path),
        }
    }
}
