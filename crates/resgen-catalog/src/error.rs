//! Error types for the Asset Catalog

/// Errors raised while building a catalog from platform data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// An asset has a zero width or height
    #[error("{platform}: asset '{asset}' has a zero dimension ({width}x{height})")]
    ZeroDimension {
        /// Platform name
        platform: String,
        /// Asset file name
        asset: String,
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
    },

    /// An asset file name has no recognised image extension
    #[error("{platform}: asset '{asset}' has no supported image extension")]
    UnsupportedExtension {
        /// Platform name
        platform: String,
        /// Asset file name
        asset: String,
    },

    /// Two platforms share a name
    #[error("duplicate platform: {0}")]
    DuplicatePlatform(String),
}
