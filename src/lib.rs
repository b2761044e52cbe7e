//! flutter-postgen finishes a project expanded from the Flutter starter
//! template: it writes the `.env` file, lays out the Android package tree,
//! removes stale generated files, keeps `.env` out of version control and
//! prints the next steps. A verification harness runs a template end to end.

/// Command-line interface module
pub mod cli;

/// Resolved answers handed over by the templating engine
pub mod config;

/// Fixed relative paths and manifests
pub mod constants;

/// Error types and handling
pub mod error;

/// `.gitignore` merging
pub mod gitignore;

/// Post-generation hook input read from stdin
pub mod hooks;

pub mod logger;

/// Package identifier to directory mapping
pub mod package;

/// Ordered execution of every setup step
pub mod pipeline;

/// Removal of files regenerated by `build_runner`
pub mod prune;

/// Android `MainActivity.kt` relocation
pub mod relocate;

/// MiniJinja rendering for the built-in generator
pub mod renderer;

/// Next-steps guidance
pub mod report;

/// `.env` synthesis
pub mod secrets;

/// End-to-end template verification
pub mod verify;
