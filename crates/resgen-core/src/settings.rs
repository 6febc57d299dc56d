//! Run settings
//!
//! Settings are a plain value passed into the pipeline. Callers start from
//! [`Settings::default`] and layer [`SettingsOverrides`] on top: first from a
//! `resgen.toml` file, then from command-line flags.

use crate::error::ConfigError;
use resgen_catalog::{AssetKind, DEFAULT_PLATFORMS};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "resgen.toml";

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Master icon image
    pub icon_source: PathBuf,
    /// Master splash image
    pub splash_source: PathBuf,
    /// Platforms to generate for
    pub active_platforms: Vec<String>,
    /// Directory all output paths are relative to
    pub output_root: PathBuf,
}

impl Settings {
    /// Create default settings
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With icon master
    #[inline]
    #[must_use]
    pub fn with_icon_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon_source = path.into();
        self
    }

    /// With splash master
    #[inline]
    #[must_use]
    pub fn with_splash_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.splash_source = path.into();
        self
    }

    /// With active platforms
    #[must_use]
    pub fn with_platforms<S: Into<String>>(mut self, platforms: impl IntoIterator<Item = S>) -> Self {
        self.active_platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    /// With output root
    #[inline]
    #[must_use]
    pub fn with_output_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_root = path.into();
        self
    }

    /// Master image for the given lane
    #[inline]
    #[must_use]
    pub fn source_for(&self, kind: AssetKind) -> &Path {
        match kind {
            AssetKind::Icon => &self.icon_source,
            AssetKind::Splash => &self.splash_source,
        }
    }

    /// Apply overrides; omitted fields keep their current value
    #[must_use]
    pub fn apply(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(icon) = overrides.icon_source {
            self.icon_source = icon;
        }
        if let Some(splash) = overrides.splash_source {
            self.splash_source = splash;
        }
        if let Some(platforms) = overrides.active_platforms {
            self.active_platforms = platforms;
        }
        if let Some(root) = overrides.output_root {
            self.output_root = root;
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            icon_source: Path::new("resources").join("icon.png"),
            splash_source: Path::new("resources").join("splash.png"),
            active_platforms: DEFAULT_PLATFORMS.iter().map(|s| (*s).to_string()).collect(),
            output_root: PathBuf::from("."),
        }
    }
}

/// Partial settings, as read from a config file or the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsOverrides {
    /// Master icon image
    #[serde(alias = "icon")]
    pub icon_source: Option<PathBuf>,
    /// Master splash image
    #[serde(alias = "splash")]
    pub splash_source: Option<PathBuf>,
    /// Platforms to generate for
    #[serde(alias = "platforms")]
    pub active_platforms: Option<Vec<String>>,
    /// Directory all output paths are relative to
    #[serde(alias = "output")]
    pub output_root: Option<PathBuf>,
}

impl SettingsOverrides {
    /// Parse overrides from TOML text
    ///
    /// # Errors
    /// - `ConfigError::Parse` if the text is not a valid settings table
    pub fn from_toml_str(path: impl AsRef<Path>, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Load overrides from a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::Parse` if the file is not a valid settings table
    pub async fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::io_error(path, e))?;
        Self::from_toml_str(path, &text)
    }

    /// Layer `other` on top of `self`; fields set in `other` win
    #[must_use]
    pub fn merge(self, other: SettingsOverrides) -> Self {
        Self {
            icon_source: other.icon_source.or(self.icon_source),
            splash_source: other.splash_source.or(self.splash_source),
            active_platforms: other.active_platforms.or(self.active_platforms),
            output_root: other.output_root.or(self.output_root),
        }
    }
}
