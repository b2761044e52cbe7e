//! Removal of stale generated files.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

/// Deletes every manifest entry that exists under `project_root`.
///
/// Missing entries are skipped. Returns the paths that were removed.
pub fn prune_artifacts<P: AsRef<Path>>(project_root: P, manifest: &[&str]) -> Result<Vec<PathBuf>> {
    let project_root = project_root.as_ref();
    let mut removed = Vec::new();

    for entry in manifest {
        let path = project_root.join(entry);
        match fs::remove_file(&path) {
            Ok(()) => removed.push(path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Skipping {}: not present", path.display());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(removed)
}
