//! Core types for the Asset Catalog
//!
//! Defines:
//! - Asset kinds (icon, splash)
//! - Icon and splash specifications
//! - Platforms and the resolved targets they expand into

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File extensions the image-processing capability can encode
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "webp", "ico",
];

/// Which master image an asset is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Square application icon, produced by uniform resize
    Icon,
    /// Splash screen, produced by scale-and-crop
    Splash,
}

impl AssetKind {
    /// Both kinds, in generation order
    pub const ALL: [AssetKind; 2] = [AssetKind::Icon, AssetKind::Splash];

    /// Lower-case label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Icon => "icon",
            AssetKind::Splash => "splash",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One required icon output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    /// Output file name; the extension selects the output format
    pub file_name: String,
    /// Width and height in pixels
    pub size: u32,
    /// Output directory used instead of the platform's icon directory
    pub sub_path: Option<PathBuf>,
    /// Android density qualifier
    pub density: Option<String>,
}

impl IconSpec {
    /// Create icon spec
    #[inline]
    #[must_use]
    pub fn new(file_name: impl Into<String>, size: u32) -> Self {
        Self {
            file_name: file_name.into(),
            size,
            sub_path: None,
            density: None,
        }
    }

    /// With sub path
    #[inline]
    #[must_use]
    pub fn with_sub_path(mut self, sub_path: impl Into<PathBuf>) -> Self {
        self.sub_path = Some(sub_path.into());
        self
    }

    /// With density qualifier
    #[inline]
    #[must_use]
    pub fn with_density(mut self, density: impl Into<String>) -> Self {
        self.density = Some(density.into());
        self
    }
}

/// One required splash screen output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashSpec {
    /// Output file name; the extension selects the output format
    pub file_name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Output directory used instead of the platform's splash directory
    pub sub_path: Option<PathBuf>,
    /// Android density qualifier
    pub density: Option<String>,
}

impl SplashSpec {
    /// Create splash spec
    #[inline]
    #[must_use]
    pub fn new(file_name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            file_name: file_name.into(),
            width,
            height,
            sub_path: None,
            density: None,
        }
    }

    /// With sub path
    #[inline]
    #[must_use]
    pub fn with_sub_path(mut self, sub_path: impl Into<PathBuf>) -> Self {
        self.sub_path = Some(sub_path.into());
        self
    }

    /// With density qualifier
    #[inline]
    #[must_use]
    pub fn with_density(mut self, density: impl Into<String>) -> Self {
        self.density = Some(density.into());
        self
    }
}

/// A single asset with its output location resolved against the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTarget {
    /// Asset kind
    pub kind: AssetKind,
    /// Output file name
    pub file_name: String,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
    /// Output path relative to the output root
    pub relative_path: PathBuf,
}

/// One target environment and everything it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// Unique short identifier (`ios`, `android`, ...)
    pub name: String,
    /// Whether this platform takes part in generation
    pub is_active: bool,
    /// Icon output directory, relative to the output root
    pub icon_output_dir: PathBuf,
    /// Splash output directory, relative to the output root
    pub splash_output_dir: PathBuf,
    /// Icons, in declaration order
    pub icons: Vec<IconSpec>,
    /// Splash screens, in declaration order
    pub splashes: Vec<SplashSpec>,
}

impl Platform {
    /// Create an inactive platform with no assets
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        icon_output_dir: impl Into<PathBuf>,
        splash_output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            is_active: false,
            icon_output_dir: icon_output_dir.into(),
            splash_output_dir: splash_output_dir.into(),
            icons: Vec::new(),
            splashes: Vec::new(),
        }
    }

    /// With icons
    #[inline]
    #[must_use]
    pub fn with_icons(mut self, icons: Vec<IconSpec>) -> Self {
        self.icons = icons;
        self
    }

    /// With splash screens
    #[inline]
    #[must_use]
    pub fn with_splashes(mut self, splashes: Vec<SplashSpec>) -> Self {
        self.splashes = splashes;
        self
    }

    /// Output directory for the given kind
    #[inline]
    #[must_use]
    pub fn output_dir(&self, kind: AssetKind) -> &Path {
        match kind {
            AssetKind::Icon => &self.icon_output_dir,
            AssetKind::Splash => &self.splash_output_dir,
        }
    }

    /// Number of assets of the given kind
    #[inline]
    #[must_use]
    pub fn asset_count(&self, kind: AssetKind) -> usize {
        match kind {
            AssetKind::Icon => self.icons.len(),
            AssetKind::Splash => self.splashes.len(),
        }
    }

    /// Density qualifiers of one kind, in declaration order
    #[must_use]
    pub fn densities(&self, kind: AssetKind) -> Vec<&str> {
        match kind {
            AssetKind::Icon => self.icons.iter().filter_map(|i| i.density.as_deref()).collect(),
            AssetKind::Splash => self
                .splashes
                .iter()
                .filter_map(|s| s.density.as_deref())
                .collect(),
        }
    }

    /// Expand the specs of one kind into resolved targets, in declaration order
    #[must_use]
    pub fn targets(&self, kind: AssetKind) -> Vec<AssetTarget> {
        let base = self.output_dir(kind);
        // A sub path replaces the platform directory outright
        let place = |sub_path: Option<&PathBuf>, file_name: &str| {
            sub_path.map_or(base, PathBuf::as_path).join(file_name)
        };

        match kind {
            AssetKind::Icon => self
                .icons
                .iter()
                .map(|icon| AssetTarget {
                    kind,
                    file_name: icon.file_name.clone(),
                    width: icon.size,
                    height: icon.size,
                    relative_path: place(icon.sub_path.as_ref(), &icon.file_name),
                })
                .collect(),
            AssetKind::Splash => self
                .splashes
                .iter()
                .map(|splash| AssetTarget {
                    kind,
                    file_name: splash.file_name.clone(),
                    width: splash.width,
                    height: splash.height,
                    relative_path: place(splash.sub_path.as_ref(), &splash.file_name),
                })
                .collect(),
        }
    }

    /// Check every spec against the catalog invariants
    ///
    /// # Errors
    /// - `CatalogError::ZeroDimension` if a size, width or height is zero
    /// - `CatalogError::UnsupportedExtension` if a file name is not an image
    pub fn validate(&self) -> Result<(), CatalogError> {
        let dims = self
            .icons
            .iter()
            .map(|i| (i.file_name.as_str(), i.size, i.size))
            .chain(
                self.splashes
                    .iter()
                    .map(|s| (s.file_name.as_str(), s.width, s.height)),
            );

        for (file_name, width, height) in dims {
            if width == 0 || height == 0 {
                return Err(CatalogError::ZeroDimension {
                    platform: self.name.clone(),
                    asset: file_name.to_string(),
                    width,
                    height,
                });
            }
            if !has_supported_extension(file_name) {
                return Err(CatalogError::UnsupportedExtension {
                    platform: self.name.clone(),
                    asset: file_name.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Whether the file name ends in an encodable image extension
#[must_use]
pub fn has_supported_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_targets_are_square() {
        let platform = Platform::new("p", "out/icon", "out/splash")
            .with_icons(vec![IconSpec::new("a.png", 36), IconSpec::new("b.png", 48)]);

        let targets = platform.targets(AssetKind::Icon);
        assert_eq!(targets.len(), 2);
        assert!(targets.iter().all(|t| t.width == t.height));
        assert_eq!(targets[1].relative_path, PathBuf::from("out/icon/b.png"));
    }

    #[test]
    fn sub_path_replaces_output_dir() {
        let platform = Platform::new("store", "store/icons", "store/screens")
            .with_splashes(vec![
                SplashSpec::new("cover.png", 1024, 500).with_sub_path("resources/android/splash"),
                SplashSpec::new("plain.png", 10, 10),
            ]);

        let targets = platform.targets(AssetKind::Splash);
        assert_eq!(
            targets[0].relative_path,
            PathBuf::from("resources/android/splash/cover.png")
        );
        assert_eq!(targets[1].relative_path, PathBuf::from("store/screens/plain.png"));
    }

    #[test]
    fn densities_follow_declaration_order() {
        let platform = Platform::new("android", "i", "s").with_icons(vec![
            IconSpec::new("a.png", 36).with_density("ldpi"),
            IconSpec::new("b.png", 48),
            IconSpec::new("c.png", 72).with_density("hdpi"),
        ]);

        assert_eq!(platform.densities(AssetKind::Icon), vec!["ldpi", "hdpi"]);
        assert!(platform.densities(AssetKind::Splash).is_empty());
    }

    #[test]
    fn zero_size_is_rejected() {
        let platform = Platform::new("p", "i", "s").with_icons(vec![IconSpec::new("a.png", 0)]);
        assert!(matches!(
            platform.validate(),
            Err(CatalogError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn zero_splash_height_is_rejected() {
        let platform =
            Platform::new("p", "i", "s").with_splashes(vec![SplashSpec::new("a.png", 10, 0)]);
        assert!(platform.validate().is_err());
    }

    #[test]
    fn non_image_extension_is_rejected() {
        let platform = Platform::new("p", "i", "s").with_icons(vec![IconSpec::new("icon.txt", 10)]);
        assert!(matches!(
            platform.validate(),
            Err(CatalogError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn extension_check_ignores_case() {
        assert!(has_supported_extension("Splash.JPG"));
        assert!(has_supported_extension("icon-83.5@2x.png"));
        assert!(!has_supported_extension("icon"));
    }
}
