//! Package identifier to directory path mapping.

use std::path::{Path, PathBuf};

/// Splits a dotted package identifier into its path segments.
///
/// No validation is done: `a..b` yields an empty middle segment.
pub fn package_segments(package_id: &str) -> Vec<&str> {
    package_id.split('.').collect()
}

/// Returns the directory nested under `source_root` for `package_id`.
pub fn package_dir<P: AsRef<Path>>(source_root: P, package_id: &str) -> PathBuf {
    package_segments(package_id)
        .into_iter()
        .fold(source_root.as_ref().to_path_buf(), |dir, segment| dir.join(segment))
}
