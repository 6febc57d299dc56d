//! Source image resolution
//!
//! A platform may ship its own master next to the global one:
//! `resources/icon.png` is overridden for android by
//! `resources/android/icon.png`.

use crate::fs::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Picks the master image for a platform
#[derive(Clone)]
pub struct SourceResolver {
    fs: Arc<dyn FileSystem>,
}

impl SourceResolver {
    /// Create resolver over a filesystem
    #[inline]
    #[must_use]
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Path of the platform override for `master`
    ///
    /// `None` if `master` has no file name.
    #[must_use]
    pub fn override_path(master: &Path, platform: &str) -> Option<PathBuf> {
        let base_name = master.file_name()?;
        let dir = master.parent().unwrap_or_else(|| Path::new(""));
        Some(dir.join(platform).join(base_name))
    }

    /// Master image to use for `platform`
    ///
    /// Returns the override if it exists, otherwise `master` unchanged. A
    /// missing master is not detected here.
    pub async fn resolve(&self, master: &Path, platform: &str) -> PathBuf {
        if let Some(candidate) = Self::override_path(master, platform) {
            if self.fs.exists(&candidate).await {
                tracing::debug!(platform, source = %candidate.display(), "using platform override");
                return candidate;
            }
        }
        master.to_path_buf()
    }
}

impl std::fmt::Debug for SourceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceResolver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::LocalFileSystem;

    fn resolver() -> SourceResolver {
        SourceResolver::new(Arc::new(LocalFileSystem))
    }

    #[test]
    fn override_sits_in_platform_folder() {
        assert_eq!(
            SourceResolver::override_path(Path::new("resources/icon.png"), "ios"),
            Some(PathBuf::from("resources/ios/icon.png"))
        );
        assert_eq!(
            SourceResolver::override_path(Path::new("icon.png"), "ios"),
            Some(PathBuf::from("ios/icon.png"))
        );
    }

    #[tokio::test]
    async fn existing_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let master = dir.path().join("icon.png");
        std::fs::write(&master, b"master").unwrap();
        std::fs::create_dir(dir.path().join("android")).unwrap();
        std::fs::write(dir.path().join("android/icon.png"), b"android").unwrap();

        let resolved = resolver().resolve(&master, "android").await;
        assert_eq!(resolved, dir.path().join("android/icon.png"));
    }

    #[tokio::test]
    async fn no_override_returns_master_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let master = dir.path().join("icon.png");
        std::fs::write(&master, b"master").unwrap();

        let resolved = resolver().resolve(&master, "ios").await;
        assert_eq!(resolved, master);
    }

    #[tokio::test]
    async fn missing_master_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let master = dir.path().join("splash.png");

        let resolved = resolver().resolve(&master, "ios").await;
        assert_eq!(resolved, master);
    }
}
