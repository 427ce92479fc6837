use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for quicksvc operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// No `--` boundary between quicksvc flags and the wrapped program.
    #[error("Separator (--) must be present on the argument list")]
    MissingSeparator,

    /// A positional token appeared before the separator.
    #[error("Unexpected argument '{0}' before the separator (--)")]
    UnexpectedArgument(String),

    /// Nothing followed the separator.
    #[error("Program path is required after the separator (--)")]
    MissingProgram,

    /// The program path could not be made absolute.
    #[error("Failed to resolve absolute path for '{path}': {reason}")]
    PathResolution { path: String, reason: String },

    /// A program argument is not valid UTF-8.
    #[error("Program argument '{0}' is not valid UTF-8")]
    InvalidArgumentEncoding(String),

    /// Service name is not usable as a package name.
    #[error(
        "Invalid service name '{0}': must be alphanumeric with '@', '.', '_', '+', or '-' and must not start with '-' or '.'"
    )]
    InvalidServiceName(String),

    /// Embedded template failed to load or render.
    #[error("Template error in '{template}': {reason}")]
    Template { template: String, reason: String },

    /// Scratch directory or artifact file could not be written.
    #[error("Failed to write {}: {}", path.display(), source)]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The external package builder failed or could not be started.
    #[error("Build failed running '{command}': {details}")]
    BuildFailed { command: String, details: String },
}

impl AppError {
    pub fn artifact_write<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        AppError::ArtifactWrite { path: path.into(), source }
    }
}
