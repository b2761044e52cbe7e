//! Error handling for flutter-postgen.
//! Defines the error type and result alias shared by every pipeline step.

use std::io;
use thiserror::Error;

/// Errors raised by the pipeline, its inputs and the verification harness.
///
/// Steps do no local recovery; every variant bubbles up to the orchestrator,
/// which turns it into a non-zero exit status.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents malformed configuration input
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A key the pipeline needs is absent from the configuration
    #[error("Configuration error: missing required key '{key}'.")]
    MissingConfigKey { key: String },

    /// Represents errors raised by MiniJinja while rendering a template
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// The hook input read from stdin could not be decoded
    #[error("Hook input error: {0}.")]
    HookInputError(String),

    /// The native source structure is not in the expected state after relocation
    #[error("Structure error: {0}.")]
    StructureError(String),

    /// The external templating engine failed
    #[error("Generator error: {0}.")]
    GeneratorError(String),

    /// A verification check failed
    #[error("Verification failed: {0}.")]
    VerificationError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error on stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("❌ Error during setup: {err}");
    std::process::exit(1);
}
