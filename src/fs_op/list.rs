//! Non-recursive listing of the regular files inside a build output directory.

use std::path::Path;

use walkdir::WalkDir;

use crate::fs_op::error::FsOpError;
use crate::fs_op::stat::PathType;

/// List the names of the regular files directly inside `dir`, sorted
/// ascending by name.
///
/// Subdirectories, special files and dangling symlinks are skipped. A symlink
/// whose target is a regular file is listed under the link's own name. An
/// empty vector means the directory exists but holds no regular files; the
/// caller decides how to report that.
pub fn list_files(dir: &Path) -> Result<Vec<String>, FsOpError> {
    match PathType::of(dir) {
        PathType::Directory => {}
        PathType::NotFound => return Err(FsOpError::NotFound(dir.to_path_buf())),
        PathType::File | PathType::Other => {
            return Err(FsOpError::NotADirectory(dir.to_path_buf()))
        }
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf());
            FsOpError::io(path, err.into())
        })?;

        let file_type = entry.file_type();
        let is_regular = if file_type.is_symlink() {
            PathType::of(entry.path()) == PathType::File
        } else {
            file_type.is_file()
        };
        if !is_regular {
            tracing::debug!("skipping non-file entry {}", entry.path().display());
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => files.push(name.to_owned()),
            None => return Err(FsOpError::InvalidFileName(entry.path().to_path_buf())),
        }
    }

    tracing::debug!("found {} files in {}", files.len(), dir.display());
    Ok(files)
}
