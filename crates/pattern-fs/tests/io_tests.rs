use pattern_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("hero.php"));

    io::write_atomic(&path, b"<?php\n/**\n */\n").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "<?php\n/**\n */\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("hero.php");
    fs::write(&file_path, "original").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_atomic(&path, b"updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
}

#[test]
fn test_write_text_creates_missing_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("theme").join("patterns").join("cta.php"));

    io::write_text(&path, "call to action").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "call to action");
}

#[test]
fn test_write_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("footer.php"));

    io::write_text(&path, "one").unwrap();
    io::write_text(&path, "two").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {:?}", leftovers);
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.php"));
    assert!(io::read_text(&path).is_err());
}

#[test]
fn test_write_fails_when_parent_is_a_file() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("patterns");
    fs::write(&blocker, "not a directory").unwrap();

    let path = NormalizedPath::new(blocker.join("hero.php"));
    let result = io::write_text(&path, "content");

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn failed_overwrite_preserves_original() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let temp = TempDir::new().unwrap();
        let parent = temp.path().join("patterns");
        fs::create_dir(&parent).unwrap();
        let file_path = parent.join("hero.php");
        fs::write(&file_path, "original").unwrap();
        fs::set_permissions(&parent, Permissions::from_mode(0o555)).unwrap();

        let result = io::write_text(&NormalizedPath::new(&file_path), "new content");

        let _ = fs::set_permissions(&parent, Permissions::from_mode(0o755));

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");
    }
}
