//! Image-processing capability
//!
//! Pixel work is delegated to an [`ImageProcessor`]. The pipeline only ever
//! asks for two operations:
//! - `resize`: uniform scale to the target box (icons)
//! - `crop`: scale to cover, then crop to the exact box (splash screens)

use crate::error::ProcessError;
use async_trait::async_trait;
use resgen_catalog::AssetKind;
use std::path::{Path, PathBuf};

/// Operation requested from the image processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Uniform scale to width x height
    Resize,
    /// Scale and crop to exactly width x height
    Crop,
}

impl TransformKind {
    /// Operation used for an asset kind
    #[inline]
    #[must_use]
    pub fn for_asset(kind: AssetKind) -> Self {
        match kind {
            AssetKind::Icon => TransformKind::Resize,
            AssetKind::Splash => TransformKind::Crop,
        }
    }
}

/// Output codec, named by lower-cased file extension
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputFormat(String);

impl OutputFormat {
    /// Format from a destination path's extension
    ///
    /// A path without an extension yields an empty format, which every
    /// processor rejects as unsupported.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        Self(ext)
    }

    /// Lower-cased extension
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Arguments of one resize or crop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOp {
    /// Image to read
    pub source: PathBuf,
    /// File to write
    pub destination: PathBuf,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
    /// Output codec
    pub format: OutputFormat,
}

impl ImageOp {
    /// Operation writing `destination` in the format its extension names
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        let destination = destination.into();
        Self {
            format: OutputFormat::from_path(&destination),
            source: source.into(),
            destination,
            width,
            height,
        }
    }
}

/// Image operations the pipeline delegates
#[async_trait]
pub trait ImageProcessor: Send + Sync {
    /// Scale `op.source` uniformly to fit `op.width` x `op.height`
    async fn resize(&self, op: &ImageOp) -> Result<(), ProcessError>;

    /// Scale `op.source` to cover `op.width` x `op.height`, then crop the excess
    async fn crop(&self, op: &ImageOp) -> Result<(), ProcessError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_lower_cased_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/Splash.JPG")).as_str(), "jpg");
        assert_eq!(OutputFormat::from_path(Path::new("icon-83.5@2x.png")).as_str(), "png");
        assert_eq!(OutputFormat::from_path(Path::new("noext")).as_str(), "");
    }

    #[test]
    fn op_derives_format_from_destination() {
        let op = ImageOp::new("icon.png", "out/icon-1024.jpg", 1024, 1024);
        assert_eq!(op.format.as_str(), "jpg");
    }

    #[test]
    fn icons_resize_and_splashes_crop() {
        assert_eq!(TransformKind::for_asset(AssetKind::Icon), TransformKind::Resize);
        assert_eq!(TransformKind::for_asset(AssetKind::Splash), TransformKind::Crop);
    }
}
