//! Testing utilities for resgen workspace
//!
//! Shared test doubles for the pipeline capabilities and image fixtures.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use resgen_core::{FileSystem, ImageOp, ImageProcessor, ProcessError, Reporter, TransformKind};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Write a gradient RGBA PNG of the given size, creating parent folders
pub fn write_master_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        image::Rgba([r, g, 128, 255])
    });
    img.save(path).unwrap();
}

/// One call observed by [`RecordingProcessor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorCall {
    pub kind: TransformKind,
    pub op: ImageOp,
    /// Sequence number taken when the call started
    pub started: u64,
    /// Sequence number taken when the call settled
    pub settled: u64,
    pub failed: bool,
}

/// Image processor that writes nothing and records every call
///
/// Each call yields to the scheduler between start and settle so that
/// concurrently launched calls interleave.
#[derive(Debug, Default)]
pub struct RecordingProcessor {
    clock: AtomicU64,
    calls: Mutex<Vec<ProcessorCall>>,
    failing: Mutex<HashSet<String>>,
}

impl RecordingProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call whose destination file name is `file_name`
    pub fn failing_on(self, file_name: impl Into<String>) -> Self {
        self.failing.lock().insert(file_name.into());
        self
    }

    pub fn calls(&self) -> Vec<ProcessorCall> {
        self.calls.lock().clone()
    }

    pub fn calls_of(&self, kind: TransformKind) -> Vec<ProcessorCall> {
        self.calls().into_iter().filter(|c| c.kind == kind).collect()
    }

    /// Calls whose destination lies under `dir`
    pub fn calls_under(&self, dir: &Path) -> Vec<ProcessorCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.op.destination.starts_with(dir))
            .collect()
    }

    async fn record(&self, kind: TransformKind, op: &ImageOp) -> Result<(), ProcessError> {
        let started = self.clock.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        let settled = self.clock.fetch_add(1, Ordering::SeqCst);

        let file_name = op
            .destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let failed = self.failing.lock().contains(&file_name);

        self.calls.lock().push(ProcessorCall {
            kind,
            op: op.clone(),
            started,
            settled,
            failed,
        });

        if failed {
            Err(ProcessError::Decode {
                path: op.source.clone(),
                source: "injected failure".into(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ImageProcessor for RecordingProcessor {
    async fn resize(&self, op: &ImageOp) -> Result<(), ProcessError> {
        self.record(TransformKind::Resize, op).await
    }

    async fn crop(&self, op: &ImageOp) -> Result<(), ProcessError> {
        self.record(TransformKind::Crop, op).await
    }
}

/// In-memory filesystem: a set of existing paths plus a log of created directories
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    existing: Mutex<HashSet<PathBuf>>,
    created: Mutex<Vec<PathBuf>>,
    read_only: Mutex<Vec<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as existing
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.existing.lock().insert(path.into());
        self
    }

    /// Refuse to create any directory under `path`
    pub fn read_only_under(self, path: impl Into<PathBuf>) -> Self {
        self.read_only.lock().push(path.into());
        self
    }

    /// Directories created, in call order
    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.created.lock().clone()
    }
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        self.existing.lock().contains(path)
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.read_only.lock().iter().any(|ro| path.starts_with(ro)) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("read-only: {}", path.display()),
            ));
        }
        self.created.lock().push(path.to_path_buf());
        let mut existing = self.existing.lock();
        for ancestor in path.ancestors() {
            existing.insert(ancestor.to_path_buf());
        }
        Ok(())
    }
}

/// A line captured by [`CapturingReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Header(String),
    Success(String),
    Error(String),
    Separator,
}

/// Reporter that keeps every line
#[derive(Debug, Default)]
pub struct CapturingReporter {
    lines: Mutex<Vec<Line>>,
}

impl CapturingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().clone()
    }

    pub fn headers(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Header(h) => Some(h),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Error(e) => Some(e),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for CapturingReporter {
    fn header(&self, text: &str) {
        self.lines.lock().push(Line::Header(text.to_string()));
    }

    fn success(&self, text: &str) {
        self.lines.lock().push(Line::Success(text.to_string()));
    }

    fn error(&self, text: &str) {
        self.lines.lock().push(Line::Error(text.to_string()));
    }

    fn separator(&self) {
        self.lines.lock().push(Line::Separator);
    }
}
