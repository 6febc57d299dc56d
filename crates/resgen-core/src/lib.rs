//! resgen Core - Generation Pipeline
//!
//! Turns two master images into every icon and splash screen the active
//! platforms need:
//! - Resolves per-platform master overrides
//! - Runs one resize/crop per asset through pluggable capabilities
//! - Sequences platforms and fans out assets within a platform
//! - Reports per-asset results without aborting on individual failures
//!
//! # Example
//!
//! ```rust,ignore
//! use resgen_core::{ConsoleReporter, LocalFileSystem, Pipeline, Settings};
//! use std::sync::Arc;
//!
//! # async fn example(processor: Arc<dyn resgen_core::ImageProcessor>) {
//! let pipeline = Pipeline::new(processor, Arc::new(LocalFileSystem), Arc::new(ConsoleReporter));
//! let report = pipeline.generate(&Settings::default()).await;
//! println!("{} assets, {} failed", report.attempted(), report.failed());
//! # }
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod display;
pub mod error;
pub mod executor;
pub mod fs;
pub mod pipeline;
pub mod processor;
pub mod report;
pub mod resolver;
pub mod settings;

// Re-exports for convenience
pub use display::{ConsoleReporter, Reporter, SilentReporter};
pub use error::{ConfigError, ProcessError, TransformError};
pub use executor::{TransformExecutor, TransformJob};
pub use fs::{FileSystem, LocalFileSystem};
pub use pipeline::Pipeline;
pub use processor::{ImageOp, ImageProcessor, OutputFormat, TransformKind};
pub use report::{AssetResult, GenerationReport, LaneReport, LaneStatus, RunOutcome};
pub use resolver::SourceResolver;
pub use settings::{Settings, SettingsOverrides, CONFIG_FILE_NAME};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the pipeline
    pub use crate::{
        FileSystem, GenerationReport, ImageOp, ImageProcessor, Pipeline, ProcessError, Reporter,
        Settings, SettingsOverrides,
    };
    pub use resgen_catalog::{AssetCatalog, AssetKind, Platform};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
