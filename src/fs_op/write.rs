use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::fs_op::error::FsOpError;

/// Write `data` to `target` atomically by writing to a temporary file in the
/// same directory and then renaming into place. An existing file is replaced
/// and keeps its permissions; a new file gets the mode a plain create would
/// (0666 less the umask). Missing parent directories are created.
pub fn atomic_write(target: &Path, data: &[u8]) -> Result<(), FsOpError> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| FsOpError::io(dir, e))?;

    // The temp file removes itself on drop if any step below fails.
    let mut tmp = temp_file_in(dir).map_err(|e| FsOpError::io(dir, e))?;
    if let Ok(meta) = fs::metadata(target) {
        if meta.is_file() {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| FsOpError::io(tmp.path(), e))?;
        }
    }
    tmp.write_all(data).map_err(|e| FsOpError::io(tmp.path(), e))?;
    tmp.flush().map_err(|e| FsOpError::io(tmp.path(), e))?;
    tmp.persist(target)
        .map_err(|e| FsOpError::io(target, e.error))?;
    Ok(())
}

// tempfile defaults to 0600; ask for 0666 so the umask decides, as it does
// for `File::create`.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .prefix(".tmp_atomic_write.")
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().prefix(".tmp_atomic_write.").tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_and_overwrites_target() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("Components.wxs");
        fs::write(&target, "old content that is longer").unwrap();

        atomic_write(&target, b"new").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn creates_missing_parent_and_leaves_no_temp_files() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("out").join("nested").join("Components.wxs");

        atomic_write(&target, "<Wix/>".as_bytes()).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "<Wix/>");

        let names: Vec<_> = fs::read_dir(target.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("Components.wxs")]);
    }

    #[test]
    fn target_that_is_a_directory_fails() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("taken");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), b"x").unwrap();

        let err = atomic_write(&target, b"data").unwrap_err();
        assert!(matches!(err, FsOpError::Io { .. }));
        assert!(target.join("keep.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        for mode in [0o644, 0o640, 0o604] {
            let target = tmp.path().join(format!("Components_{:o}.wxs", mode));
            fs::write(&target, "old").unwrap();
            fs::set_permissions(&target, fs::Permissions::from_mode(mode)).unwrap();

            atomic_write(&target, b"new").unwrap();
            let after = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
            assert_eq!(after, mode, "mode changed for {}", target.display());
            assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        }
    }

    #[cfg(unix)]
    #[test]
    fn new_file_gets_same_mode_as_plain_create() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let plain = tmp.path().join("plain.wxs");
        fs::write(&plain, "x").unwrap();
        let expected = fs::metadata(&plain).unwrap().permissions().mode() & 0o777;

        let target = tmp.path().join("Components.wxs");
        atomic_write(&target, b"x").unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, expected);
    }
}
