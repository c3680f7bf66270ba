use std::path::Path;

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist (or is a dangling symlink).
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (for example: socket, FIFO, block device).
    Other,
}

impl PathType {
    /// Classify `path` and return its `PathType`. Symlinks are followed, so a
    /// link to a regular file classifies as `File`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::metadata(path.as_ref()) {
            Err(_) => PathType::NotFound,
            Ok(meta) if meta.is_dir() => PathType::Directory,
            Ok(meta) if meta.is_file() => PathType::File,
            Ok(_) => PathType::Other,
        }
    }
}

/// Return `true` if the provided `path` is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}
