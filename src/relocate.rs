//! Android package structure setup.
//! Moves the expanded `MainActivity.kt.template` into the directory tree
//! implied by the package identifier, or writes a minimal activity when the
//! placeholder is gone.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{
    KOTLIN_SOURCE_ROOT, LEGACY_PACKAGE_DIR, MAIN_ACTIVITY_TEMPLATE, TEMPLATE_SUFFIX,
};
use crate::error::{Error, Result};
use crate::package::package_dir;

/// How the activity file ended up at its final location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The expanded placeholder was moved into place
    Moved,
    /// The placeholder was missing and the activity from a previous run was kept
    Kept,
    /// The placeholder was missing and the file was written from the skeleton
    Synthesized,
}

/// Outcome of [`relocate_main_activity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub path: PathBuf,
    pub origin: Origin,
    pub legacy_removed: bool,
}

/// Minimal activity written when no placeholder is available.
pub fn main_activity_skeleton(package_id: &str) -> String {
    format!(
        "package {package_id}\n\
         \n\
         import io.flutter.embedding.android.FlutterActivity\n\
         \n\
         class MainActivity : FlutterActivity()\n"
    )
}

/// File name of the relocated activity (`MainActivity.kt`).
pub fn main_activity_file_name() -> &'static str {
    let name = MAIN_ACTIVITY_TEMPLATE.rsplit('/').next().unwrap_or(MAIN_ACTIVITY_TEMPLATE);
    name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(name)
}

/// Path the activity is expected at for `package_id`.
pub fn main_activity_path<P: AsRef<Path>>(project_root: P, package_id: &str) -> PathBuf {
    package_dir(project_root.as_ref().join(KOTLIN_SOURCE_ROOT), package_id)
        .join(main_activity_file_name())
}

/// Rebuilds the Kotlin package tree for `package_id`.
///
/// Steps, in order:
/// 1. remove the legacy `kotlin/com` tree if present
/// 2. create the package directory
/// 3. move the placeholder into it; without a placeholder keep the activity
///    of a previous run, or write the skeleton if there is none
/// 4. fail unless the activity file now exists
///
/// An activity already at the target survives step 1 even when the package
/// lives under `com`.
///
/// A failure partway leaves the tree as it was at that point.
///
/// # Errors
/// * `Error::IoError` on any filesystem failure
/// * `Error::StructureError` if the activity is missing after step 3
pub fn relocate_main_activity<P: AsRef<Path>>(
    project_root: P,
    package_id: &str,
) -> Result<Relocation> {
    let project_root = project_root.as_ref();
    let target = main_activity_path(project_root, package_id);
    let previous = if target.is_file() { Some(fs::read(&target)?) } else { None };

    let legacy_dir = project_root.join(LEGACY_PACKAGE_DIR);
    let legacy_removed = legacy_dir.exists();
    if legacy_removed {
        debug!("Removing legacy package structure: {}", legacy_dir.display());
        fs::remove_dir_all(&legacy_dir)?;
    }

    if let Some(target_dir) = target.parent() {
        fs::create_dir_all(target_dir)?;
    }

    let placeholder = project_root.join(MAIN_ACTIVITY_TEMPLATE);
    let origin = if placeholder.is_file() {
        debug!("Moving {} to {}", placeholder.display(), target.display());
        fs::rename(&placeholder, &target)?;
        Origin::Moved
    } else if let Some(content) = previous {
        debug!("Placeholder missing, keeping {}", target.display());
        if !target.is_file() {
            fs::write(&target, content)?;
        }
        Origin::Kept
    } else {
        debug!("Placeholder missing, writing {} from skeleton", target.display());
        fs::write(&target, main_activity_skeleton(package_id))?;
        Origin::Synthesized
    };

    if !target.is_file() {
        return Err(Error::StructureError(format!(
            "'{}' does not exist after relocation",
            target.display()
        )));
    }

    Ok(Relocation { path: target, origin, legacy_removed })
}
