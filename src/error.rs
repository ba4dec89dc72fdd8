//! Error handling for the Boiling application.
//! Defines the crate-wide error type and result alias used by every stage
//! of the configuration pipeline and the scaffolder.

use std::io;
use thiserror::Error;

/// Errors produced while processing the configuration or scaffolding a
/// project.
///
/// The pipeline is fail-fast: the first error aborts the whole command, so
/// every variant carries a single human-readable message.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem or child-process I/O failure
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Malformed configuration text, reported with the line it was found on
    #[error("Syntax error at line {line}: {message}.")]
    LexError { line: usize, message: String },

    /// Structurally valid token stream with an unknown or misplaced element
    #[error("Config error: {0}.")]
    SemanticError(String),

    /// A well-formed configuration that violates a schema rule
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Malformed placeholder in a license template
    #[error("License error: {0}.")]
    PlaceholderError(String),

    /// Filesystem mutation or external command failure during scaffolding
    #[error("Scaffold error: {0}.")]
    ScaffoldError(String),

    /// A required file (configuration, template) could not be located
    #[error("{0}")]
    NotFoundError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
