use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/* ============================================================
   Public entry
   ============================================================ */

/// Writes `test_code` to `repo_root/test_file`, creating parent directories
/// as needed. Existing files are overwritten.
pub fn write_test(repo_root: &Path, test_file: &Path, test_code: &str) -> io::Result<PathBuf> {
    let path = repo_root.join(test_file);
    ensure_parent_dir(&path)?;
    fs::write(&path, test_code)?;
    Ok(path)
}

/* ============================================================
   Helpers
   ============================================================ */

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_nested_directories() {
        let dir = tempdir().unwrap();
        let out = write_test(dir.path(), Path::new("tests/src/pkg/a_test.py"), "def test_a(): pass\n")
            .unwrap();

        assert_eq!(out, dir.path().join("tests/src/pkg/a_test.py"));
        assert_eq!(fs::read_to_string(out).unwrap(), "def test_a(): pass\n");
    }

    #[test]
    fn overwrites_previous_output() {
        let dir = tempdir().unwrap();
        let rel = Path::new("tests/a_test.py");
        write_test(dir.path(), rel, "old").unwrap();
        write_test(dir.path(), rel, "new").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join(rel)).unwrap(), "new");
    }

    #[test]
    fn blocked_directory_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tests"), "not a dir").unwrap();
        assert!(write_test(dir.path(), Path::new("tests/a_test.py"), "x").is_err());
    }
}
