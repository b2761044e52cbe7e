use flutter_postgen::constants::{IGNORE_FILE, SECRETS_FILE};
use flutter_postgen::gitignore::{ensure_ignored, MergeOutcome};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_creates_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(IGNORE_FILE);

    assert_eq!(ensure_ignored(&path, SECRETS_FILE).unwrap(), MergeOutcome::Created);
    assert_eq!(fs::read_to_string(&path).unwrap(), "# Environment variables\n.env\n");
}

#[test]
fn test_appends_preserving_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(IGNORE_FILE);
    fs::write(&path, "build/\n.dart_tool/").unwrap();

    assert_eq!(ensure_ignored(&path, SECRETS_FILE).unwrap(), MergeOutcome::Appended);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "build/\n.dart_tool/\n\n# Environment variables\n.env\n"
    );
}

#[test]
fn test_existing_entry_is_left_alone() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(IGNORE_FILE);
    fs::write(&path, "build/\n.env\n").unwrap();

    assert_eq!(ensure_ignored(&path, SECRETS_FILE).unwrap(), MergeOutcome::AlreadyPresent);
    assert_eq!(fs::read_to_string(&path).unwrap(), "build/\n.env\n");
}

#[test]
fn test_idempotent() {
    for initial in [None, Some(""), Some("build/\n"), Some("*.log")] {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(IGNORE_FILE);
        if let Some(content) = initial {
            fs::write(&path, content).unwrap();
        }

        ensure_ignored(&path, SECRETS_FILE).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        assert_eq!(ensure_ignored(&path, SECRETS_FILE).unwrap(), MergeOutcome::AlreadyPresent);
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second, "{initial:?}");
        assert_eq!(second.matches(SECRETS_FILE).count(), 1);
    }
}
