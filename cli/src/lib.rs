//! resgen - platform icons and splash screens from two master images
//!
//! Wires the production capabilities (local filesystem, `image`-backed
//! processor, console output) into the generation pipeline.
//!
//! # Example
//!
//! ```rust,no_run
//! use resgen::SettingsOverrides;
//!
//! # async fn example() {
//! let report = resgen::generate(SettingsOverrides {
//!     active_platforms: Some(vec!["android".to_string()]),
//!     ..Default::default()
//! })
//! .await;
//! assert_eq!(report.failed(), 0);
//! # }
//! ```

use resgen_catalog::{builtin_platforms, AssetKind, DEFAULT_PLATFORMS};
use resgen_core::{ConsoleReporter, LocalFileSystem, Pipeline, Reporter};
use resgen_imaging::ImageCrateProcessor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use resgen_core::{
    ConfigError, GenerationReport, RunOutcome, Settings, SettingsOverrides, CONFIG_FILE_NAME,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate every asset for the given options, printing progress to stdout
///
/// Omitted options keep their defaults. Individual asset failures are
/// reported, never returned as an error.
pub async fn generate(options: SettingsOverrides) -> GenerationReport {
    let settings = Settings::default().apply(options);
    generate_with(&settings, Arc::new(ConsoleReporter)).await
}

/// Generate every asset for `settings` through `reporter`
pub async fn generate_with(settings: &Settings, reporter: Arc<dyn Reporter>) -> GenerationReport {
    let pipeline = Pipeline::new(
        Arc::new(ImageCrateProcessor::new()),
        Arc::new(LocalFileSystem),
        reporter,
    );
    pipeline.generate(settings).await
}

/// Load config overrides
///
/// An explicit path must exist. Without one, `resgen.toml` in
/// `working_dir` is read if present; otherwise no overrides apply.
///
/// # Errors
/// - `ConfigError::Io` if the file cannot be read
/// - `ConfigError::Parse` if the file is not a valid settings table
pub async fn load_config(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> Result<SettingsOverrides, ConfigError> {
    if let Some(path) = explicit {
        return SettingsOverrides::from_toml_file(path).await;
    }

    let path = working_dir.join(CONFIG_FILE_NAME);
    let present = tokio::fs::try_exists(&path)
        .await
        .map_err(|e| ConfigError::io_error(&path, e))?;
    if !present {
        tracing::debug!(path = %path.display(), "no config file");
        return Ok(SettingsOverrides::default());
    }
    SettingsOverrides::from_toml_file(&path).await
}

/// Split a comma-separated platform list, dropping blanks
#[must_use]
pub fn parse_platforms(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// One line of the built-in catalog listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRow {
    /// Platform name
    pub name: String,
    /// Icon or splash lane
    pub kind: AssetKind,
    /// Assets in this lane
    pub assets: usize,
    /// Lane output directory
    pub output_dir: PathBuf,
    /// Density qualifiers of the lane's assets, in declaration order
    pub densities: Vec<String>,
    /// Active when no platforms are chosen
    pub default: bool,
}

/// Built-in catalog as listing rows, in generation order
#[must_use]
pub fn platform_rows() -> Vec<PlatformRow> {
    builtin_platforms()
        .iter()
        .flat_map(|platform| {
            AssetKind::ALL.iter().map(move |&kind| PlatformRow {
                name: platform.name.clone(),
                kind,
                assets: platform.asset_count(kind),
                output_dir: platform.output_dir(kind).to_path_buf(),
                densities: platform
                    .densities(kind)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                default: DEFAULT_PLATFORMS.contains(&platform.name.as_str()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn platform_list_is_trimmed() {
        assert_eq!(parse_platforms(" ios, android ,,wp8 "), vec!["ios", "android", "wp8"]);
        assert!(parse_platforms("").is_empty());
    }

    #[test]
    fn rows_cover_both_lanes_of_every_platform() {
        let rows = platform_rows();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].name, "ios");
        assert_eq!(rows[0].kind, AssetKind::Icon);
        assert_eq!(rows[0].assets, 18);
        assert!(rows[0].default);

        let store_icons = rows
            .iter()
            .find(|r| r.name == "store" && r.kind == AssetKind::Icon)
            .unwrap();
        assert_eq!(store_icons.output_dir, PathBuf::from("store/icons"));
        assert!(!store_icons.default);
        assert!(store_icons.densities.is_empty());

        let android_icons = rows
            .iter()
            .find(|r| r.name == "android" && r.kind == AssetKind::Icon)
            .unwrap();
        assert_eq!(
            android_icons.densities,
            vec!["ldpi", "mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"]
        );
    }

    #[tokio::test]
    async fn absent_default_config_means_no_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = load_config(None, dir.path()).await.unwrap();
        assert_eq!(overrides, SettingsOverrides::default());
    }

    #[tokio::test]
    async fn default_config_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "output = \"build\"\n").unwrap();

        let overrides = load_config(None, dir.path()).await.unwrap();
        assert_eq!(overrides.output_root, Some(PathBuf::from("build")));
    }

    #[tokio::test]
    async fn explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("other.toml");

        let err = load_config(Some(&missing), dir.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
