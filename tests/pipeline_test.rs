use flutter_postgen::config::Configuration;
use flutter_postgen::constants::{
    IGNORE_FILE, KOTLIN_SOURCE_ROOT, LEGACY_PACKAGE_DIR, MAIN_ACTIVITY_TEMPLATE,
    REGENERABLE_ARTIFACTS, SECRETS_FILE,
};
use flutter_postgen::error::Error;
use flutter_postgen::gitignore::MergeOutcome;
use flutter_postgen::pipeline::Pipeline;
use flutter_postgen::relocate::Origin;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

fn config(package_name: &str) -> Configuration {
    let mut config = Configuration::parse(
        r#"{
            "project_name": "Test Flutter App",
            "project_slug": "test_flutter_app",
            "project_description": "A test Flutter application",
            "api_base_url": "https://api.test.com",
            "enable_logging": "y",
            "enable_crash_reporting": "n",
            "enable_analytics": "n"
        }"#,
    )
    .unwrap();
    config.insert("package_name", serde_json::json!(package_name));
    config
}

fn expanded_project(root: &Path) {
    for artifact in REGENERABLE_ARTIFACTS {
        let path = root.join(artifact);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "// generated\n").unwrap();
    }
    fs::write(root.join(MAIN_ACTIVITY_TEMPLATE), "package com.test.flutter_app\n").unwrap();
    fs::write(root.join(IGNORE_FILE), "build/\n").unwrap();
}

fn kotlin_files(root: &Path) -> usize {
    WalkDir::new(root.join(KOTLIN_SOURCE_ROOT))
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test_log::test]
fn test_full_run() {
    let temp_dir = TempDir::new().unwrap();
    expanded_project(temp_dir.path());
    let config = config("com.test.flutter_app");

    let report = Pipeline::new(temp_dir.path(), &config).run().unwrap();

    let env = fs::read_to_string(&report.secrets_file).unwrap();
    assert!(env.contains("Test Flutter App"));
    assert!(env.contains("https://api.test.com"));

    assert_eq!(report.relocation.origin, Origin::Moved);
    assert!(report.relocation.path.ends_with("com/test/flutter_app/MainActivity.kt"));
    assert_eq!(kotlin_files(temp_dir.path()), 1);

    // The placeholder was moved away before pruning ran.
    assert_eq!(report.pruned.len(), REGENERABLE_ARTIFACTS.len() - 1);
    for artifact in REGENERABLE_ARTIFACTS {
        assert!(!temp_dir.path().join(artifact).exists(), "{artifact}");
    }

    assert_eq!(report.ignore_list, MergeOutcome::Appended);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join(IGNORE_FILE)).unwrap(),
        "build/\n\n# Environment variables\n.env\n"
    );
}

#[test]
fn test_rerun_over_legacy_structure() {
    let temp_dir = TempDir::new().unwrap();
    expanded_project(temp_dir.path());
    let stale = temp_dir.path().join(LEGACY_PACKAGE_DIR).join("example/starter/MainActivity.kt");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "package com.example.starter\n").unwrap();
    let config = config("io.acme.store");

    let first = Pipeline::new(temp_dir.path(), &config).show_next_steps(false).run().unwrap();
    assert!(first.relocation.legacy_removed);
    assert!(!temp_dir.path().join(LEGACY_PACKAGE_DIR).exists());

    let second = Pipeline::new(temp_dir.path(), &config).show_next_steps(false).run().unwrap();
    assert!(!second.relocation.legacy_removed);
    assert_eq!(second.relocation.path, first.relocation.path);
    assert_eq!(second.relocation.origin, Origin::Kept);
    assert_eq!(second.ignore_list, MergeOutcome::AlreadyPresent);
    assert!(second.pruned.is_empty());
    assert_eq!(kotlin_files(temp_dir.path()), 1);
}

#[test]
fn test_rerun_with_default_package_keeps_activity() {
    let temp_dir = TempDir::new().unwrap();
    expanded_project(temp_dir.path());
    let expanded = "package com.example.demo\n// expanded by the template\n";
    fs::write(temp_dir.path().join(MAIN_ACTIVITY_TEMPLATE), expanded).unwrap();
    let config = config("com.example.demo");

    Pipeline::new(temp_dir.path(), &config).show_next_steps(false).run().unwrap();
    let second = Pipeline::new(temp_dir.path(), &config).show_next_steps(false).run().unwrap();

    assert!(second.relocation.legacy_removed);
    assert_eq!(second.relocation.origin, Origin::Kept);
    assert_eq!(fs::read_to_string(&second.relocation.path).unwrap(), expanded);
    assert_eq!(kotlin_files(temp_dir.path()), 1);
}

#[test]
fn test_runs_are_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let config = config("com.test.flutter_app");

    for dir in [&first, &second] {
        expanded_project(dir.path());
        Pipeline::new(dir.path(), &config).show_next_steps(false).run().unwrap();
    }

    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_missing_package_name_aborts_after_secrets() {
    let temp_dir = TempDir::new().unwrap();
    expanded_project(temp_dir.path());
    let mut config = Configuration::parse(
        r#"{"project_name": "Demo", "api_base_url": "https://api.demo.dev",
            "enable_logging": true, "enable_crash_reporting": false, "enable_analytics": false}"#,
    )
    .unwrap();
    config.insert("project_slug", serde_json::json!("demo"));

    let result = Pipeline::new(temp_dir.path(), &config).run();

    match result {
        Err(Error::MissingConfigKey { key }) => assert_eq!(key, "package_name"),
        other => panic!("Expected MissingConfigKey, got {other:?}"),
    }
    assert!(temp_dir.path().join(SECRETS_FILE).exists());
    assert!(temp_dir.path().join(MAIN_ACTIVITY_TEMPLATE).exists());
    assert_eq!(fs::read_to_string(temp_dir.path().join(IGNORE_FILE)).unwrap(), "build/\n");
}

#[test]
fn test_missing_slug_fails_before_touching_tree() {
    let temp_dir = TempDir::new().unwrap();
    expanded_project(temp_dir.path());
    let config = Configuration::parse(
        r#"{"project_name": "Demo", "package_name": "com.demo.app",
            "api_base_url": "https://api.demo.dev", "enable_logging": true,
            "enable_crash_reporting": false, "enable_analytics": false}"#,
    )
    .unwrap();

    let result = Pipeline::new(temp_dir.path(), &config).run();

    match result {
        Err(Error::MissingConfigKey { key }) => assert_eq!(key, "project_slug"),
        other => panic!("Expected MissingConfigKey, got {other:?}"),
    }
    assert!(!temp_dir.path().join(SECRETS_FILE).exists());
    assert!(temp_dir.path().join(MAIN_ACTIVITY_TEMPLATE).exists());
    assert_eq!(fs::read_to_string(temp_dir.path().join(IGNORE_FILE)).unwrap(), "build/\n");
}
