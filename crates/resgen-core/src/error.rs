//! Error types for the generation pipeline
//!
//! Provides error handling for:
//! - Image processing (decode, encode, write)
//! - Transform execution (directory creation + processing)
//! - Configuration loading

use std::path::PathBuf;

/// Errors reported by an image-processing capability
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// Source image does not exist
    #[error("source image not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// Output format cannot be encoded
    #[error("unsupported output format: '{0}'")]
    UnsupportedFormat(String),

    /// Source could not be read or decoded
    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        /// Source image
        path: PathBuf,
        /// Underlying reader or codec error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Output could not be encoded or written
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// Output file
        path: PathBuf,
        /// Underlying encoder or io error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Background worker failed before producing a result
    #[error("image worker failed: {0}")]
    Worker(String),
}

/// Failure of a single asset transform
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Destination directory could not be created
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// The image-processing capability rejected the operation
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Errors while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the settings schema
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        /// Config file
        path: PathBuf,
        /// TOML error with location
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
