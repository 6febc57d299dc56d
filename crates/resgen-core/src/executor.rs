//! Transform execution
//!
//! Runs exactly one resize or crop for one asset:
//! 1. Ensure the destination directory exists
//! 2. Delegate to the image processor
//! 3. Report success
//!
//! Failures carry the underlying cause and are never retried.

use crate::display::Reporter;
use crate::error::TransformError;
use crate::fs::FileSystem;
use crate::processor::{ImageOp, ImageProcessor, TransformKind};
use std::sync::Arc;

/// One asset transform, fully resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformJob {
    /// Platform the asset belongs to
    pub platform: String,
    /// Asset file name, used in progress lines
    pub asset: String,
    /// Resize or crop
    pub kind: TransformKind,
    /// Source, destination, size and format
    pub op: ImageOp,
}

/// Applies transform jobs through the filesystem and image capabilities
#[derive(Clone)]
pub struct TransformExecutor {
    processor: Arc<dyn ImageProcessor>,
    fs: Arc<dyn FileSystem>,
    reporter: Arc<dyn Reporter>,
}

impl TransformExecutor {
    /// Create executor
    #[inline]
    #[must_use]
    pub fn new(
        processor: Arc<dyn ImageProcessor>,
        fs: Arc<dyn FileSystem>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            processor,
            fs,
            reporter,
        }
    }

    /// Apply one job
    ///
    /// # Errors
    /// - `TransformError::CreateDir` if the destination directory cannot be created
    /// - `TransformError::Process` if the image processor fails
    pub async fn apply(&self, job: &TransformJob) -> Result<(), TransformError> {
        tracing::debug!(
            platform = %job.platform,
            asset = %job.asset,
            kind = ?job.kind,
            width = job.op.width,
            height = job.op.height,
            "applying transform"
        );

        if let Some(dir) = job.op.destination.parent() {
            if !dir.as_os_str().is_empty() && !self.fs.exists(dir).await {
                self.fs
                    .create_dir_all(dir)
                    .await
                    .map_err(|source| TransformError::CreateDir {
                        path: dir.to_path_buf(),
                        source,
                    })?;
            }
        }

        match job.kind {
            TransformKind::Resize => self.processor.resize(&job.op).await?,
            TransformKind::Crop => self.processor.crop(&job.op).await?,
        }

        self.reporter.success(&format!("{} created", job.asset));
        Ok(())
    }
}

impl std::fmt::Debug for TransformExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformExecutor").finish_non_exhaustive()
    }
}
