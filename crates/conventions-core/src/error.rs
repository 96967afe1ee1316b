//! Error types for conventions-core

use std::path::PathBuf;

/// Result type for conventions-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or applying conventions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A raw value could not be parsed as the setting's type
    #[error("Invalid value '{value}' for '{name}': expected {expected}")]
    InvalidPropertyValue {
        name: String,
        value: String,
        expected: String,
    },

    /// A required setting was not supplied by any source
    #[error("Property '{property}' must be configured: no value for '{name}' could be resolved")]
    MissingRequiredSetting { name: String, property: String },

    /// Source files sit under more than one top-level package
    #[error("Cannot infer base package: sources found under unrelated packages [{}]", .candidates.join(", "))]
    AmbiguousBasePackage { candidates: Vec<String> },

    /// Inference ran but could not produce a usable value
    #[error("Inference failed for '{name}': {reason}")]
    InferenceFailure { name: String, reason: String },

    /// A resource that should be compiled into the binary is absent
    #[error("Missing bundled resource '{name}'")]
    MissingBundledResource { name: String },

    /// An override names a setting that does not exist
    #[error("Unknown setting '{name}'")]
    UnknownSetting { name: String },

    /// The project manifest or defaults file is malformed
    #[error("Failed to parse {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Filesystem error from conventions-fs
    #[error(transparent)]
    Fs(#[from] conventions_fs::Error),

    /// Git error from conventions-git
    #[error(transparent)]
    Git(#[from] conventions_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_value(
        name: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidPropertyValue {
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}
