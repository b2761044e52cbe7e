//! Fixed paths and file names the pipeline works with.
//! All paths are relative to the generated project root.

/// Secrets file written at the project root
pub const SECRETS_FILE: &str = ".env";

/// Ignore list the secrets file is merged into
pub const IGNORE_FILE: &str = ".gitignore";

/// Comment line preceding the secrets entry in the ignore list
pub const IGNORE_COMMENT: &str = "# Environment variables";

/// Root of the Android Kotlin sources
pub const KOTLIN_SOURCE_ROOT: &str = "android/app/src/main/kotlin";

/// Package structure left behind by the previous naming scheme
pub const LEGACY_PACKAGE_DIR: &str = "android/app/src/main/kotlin/com";

/// Placeholder activity expanded by the templating engine
pub const MAIN_ACTIVITY_TEMPLATE: &str = "android/app/src/main/kotlin/MainActivity.kt.template";

/// Suffix stripped from the placeholder when it is relocated
pub const TEMPLATE_SUFFIX: &str = ".template";

/// Generated files that are stale by construction.
///
/// The placeholder is listed as well: after relocation it must not survive
/// next to the package tree.
pub const REGENERABLE_ARTIFACTS: [&str; 4] = [
    MAIN_ACTIVITY_TEMPLATE,
    "lib/core/config/env.g.dart",
    "lib/data/models/todo_model.g.dart",
    "lib/data/datasources/remote/todo_remote_datasource.g.dart",
];

/// Post-generation hook script, relative to the template root
pub const POST_GEN_HOOK: &str = "hooks/post_gen_project";

/// Template configuration files that are never copied into a generated project
pub const TEMPLATE_CONFIG_FILES: [&str; 4] =
    ["cookiecutter.json", "baker.json", "baker.yml", "baker.yaml"];

/// Namespace the answers are exposed under while rendering a template
pub const TEMPLATE_NAMESPACE: &str = "cookiecutter";
