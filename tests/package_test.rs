use flutter_postgen::package::{package_dir, package_segments};
use std::path::PathBuf;

#[test]
fn test_package_segments() {
    assert_eq!(package_segments("com.example.app"), vec!["com", "example", "app"]);
    assert_eq!(package_segments("app"), vec!["app"]);
}

#[test]
fn test_empty_segments_are_kept() {
    assert_eq!(package_segments("com..app"), vec!["com", "", "app"]);
    assert_eq!(package_segments(""), vec![""]);
}

#[test]
fn test_package_dir() {
    assert_eq!(
        package_dir("kotlin", "com.test.flutter_app"),
        PathBuf::from("kotlin/com/test/flutter_app")
    );
}
