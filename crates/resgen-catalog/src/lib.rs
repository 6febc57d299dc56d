//! resgen Asset Catalog
//!
//! Declarative description of every platform resgen knows how to produce
//! resources for:
//! - Icon tables (square outputs, one size per file)
//! - Splash screen tables (independent width and height)
//! - Output directories, with per-asset `sub_path` overrides for
//!   aggregation platforms such as `store`
//!
//! The catalog performs no I/O. It is built once from embedded data and
//! filtered by the caller's active platform list.
//!
//! # Example
//!
//! ```rust
//! use resgen_catalog::{AssetCatalog, AssetKind};
//!
//! let catalog = AssetCatalog::builtin(&["android"]);
//! let platforms = catalog.list_icon_platforms();
//! assert_eq!(platforms.len(), 1);
//! assert_eq!(platforms[0].targets(AssetKind::Icon).len(), 6);
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod builtin;
pub mod catalog;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use builtin::{builtin_platforms, DEFAULT_PLATFORMS};
pub use catalog::AssetCatalog;
pub use error::CatalogError;
pub use types::{AssetKind, AssetTarget, IconSpec, Platform, SplashSpec, SUPPORTED_EXTENSIONS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
