//! Filesystem capability
//!
//! The pipeline only needs two things from the filesystem: existence checks
//! and recursive directory creation. Both go through [`FileSystem`] so tests
//! can observe every write.

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Filesystem operations used by the pipeline
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Whether a file or directory exists at `path`
    async fn exists(&self, path: &Path) -> bool;

    /// Create `path` and all missing ancestors
    ///
    /// Succeeds if the directory already exists.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// The local filesystem, through `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut builder = tokio::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(0o777);
        builder.create(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_nested_directories_idempotently() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a/b/c");
        let fs = LocalFileSystem;

        assert!(!fs.exists(&nested).await);
        fs.create_dir_all(&nested).await.unwrap();
        fs.create_dir_all(&nested).await.unwrap();
        assert!(fs.exists(&nested).await);
    }
}
