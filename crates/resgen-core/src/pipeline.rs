//! Pipeline orchestration
//!
//! A run has two lanes, icons and splashes, with the same shape:
//!
//! ```text
//! for platform in catalog order:          (sequential barrier)
//!     source = resolve(master, platform)
//!     join_all(apply(asset) for asset)    (concurrent fan-out)
//! ```
//!
//! Failures are caught per asset. A failed asset never stops its siblings,
//! the following platforms, or the other lane. The only run-level outcome
//! besides completion is "nothing to do", when neither master exists.

use crate::display::Reporter;
use crate::executor::{TransformExecutor, TransformJob};
use crate::fs::FileSystem;
use crate::processor::{ImageOp, ImageProcessor, TransformKind};
use crate::report::{AssetResult, GenerationReport, LaneReport, RunOutcome};
use crate::resolver::SourceResolver;
use crate::settings::Settings;
use chrono::Utc;
use futures::future::join_all;
use resgen_catalog::{AssetCatalog, AssetKind, Platform};
use std::path::Path;
use std::sync::Arc;

/// Generation orchestrator
#[derive(Clone)]
pub struct Pipeline {
    executor: TransformExecutor,
    resolver: SourceResolver,
    fs: Arc<dyn FileSystem>,
    reporter: Arc<dyn Reporter>,
}

impl Pipeline {
    /// Create pipeline over the three capabilities
    #[must_use]
    pub fn new(
        processor: Arc<dyn ImageProcessor>,
        fs: Arc<dyn FileSystem>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            executor: TransformExecutor::new(processor, fs.clone(), reporter.clone()),
            resolver: SourceResolver::new(fs.clone()),
            fs,
            reporter,
        }
    }

    /// Run both lanes against the built-in catalog
    pub async fn generate(&self, settings: &Settings) -> GenerationReport {
        let catalog = AssetCatalog::builtin(settings.active_platforms.as_slice());
        self.generate_with_catalog(settings, &catalog).await
    }

    /// Run both lanes against `catalog`
    ///
    /// The active flags of `catalog` decide which platforms run;
    /// `settings.active_platforms` is not consulted.
    pub async fn generate_with_catalog(
        &self,
        settings: &Settings,
        catalog: &AssetCatalog,
    ) -> GenerationReport {
        let started_at = Utc::now();
        tracing::info!(
            platforms = ?settings.active_platforms,
            output = %settings.output_root.display(),
            "starting generation"
        );

        self.reporter.header("Checking Splash & Icon");
        let (has_icon, has_splash) = tokio::join!(
            self.check_master(&settings.icon_source),
            self.check_master(&settings.splash_source),
        );

        if !has_icon && !has_splash {
            tracing::info!("no master images found, nothing to do");
            self.reporter.separator();
            return GenerationReport::nothing_to_do(started_at);
        }

        let icons = if has_icon {
            self.run_lane(AssetKind::Icon, settings, catalog).await
        } else {
            LaneReport::skipped(AssetKind::Icon)
        };
        let splashes = if has_splash {
            self.run_lane(AssetKind::Splash, settings, catalog).await
        } else {
            LaneReport::skipped(AssetKind::Splash)
        };

        self.reporter.separator();

        let report = GenerationReport {
            outcome: RunOutcome::Completed,
            icons,
            splashes,
            started_at,
            finished_at: Utc::now(),
        };
        tracing::info!(
            attempted = report.attempted(),
            failed = report.failed(),
            "generation finished"
        );
        report
    }

    async fn check_master(&self, path: &Path) -> bool {
        let exists = self.fs.exists(path).await;
        if exists {
            self.reporter.success(&format!("{} exists", path.display()));
        } else {
            self.reporter
                .error(&format!("{} does not exist in the root folder", path.display()));
        }
        exists
    }

    async fn run_lane(
        &self,
        kind: AssetKind,
        settings: &Settings,
        catalog: &AssetCatalog,
    ) -> LaneReport {
        let mut lane = LaneReport::ran(kind);
        let master = settings.source_for(kind);

        for platform in catalog.list_platforms(kind) {
            let results = self
                .run_batch(kind, platform, master, &settings.output_root)
                .await;
            lane.platforms.push(platform.name.clone());
            lane.assets.extend(results);
        }

        tracing::info!(
            lane = %kind,
            attempted = lane.attempted(),
            failed = lane.failed(),
            "lane finished"
        );
        lane
    }

    async fn run_batch(
        &self,
        kind: AssetKind,
        platform: &Platform,
        master: &Path,
        output_root: &Path,
    ) -> Vec<AssetResult> {
        self.reporter.header(&batch_header(kind, &platform.name));

        let source = self.resolver.resolve(master, &platform.name).await;
        let jobs: Vec<TransformJob> = platform
            .targets(kind)
            .into_iter()
            .map(|target| TransformJob {
                platform: platform.name.clone(),
                asset: target.file_name,
                kind: TransformKind::for_asset(kind),
                op: ImageOp::new(
                    source.clone(),
                    output_root.join(&target.relative_path),
                    target.width,
                    target.height,
                ),
            })
            .collect();

        tracing::info!(platform = %platform.name, lane = %kind, assets = jobs.len(), "generating batch");
        let outcomes = join_all(jobs.iter().map(|job| self.executor.apply(job))).await;

        jobs.into_iter()
            .zip(outcomes)
            .map(|(job, outcome)| {
                let error = outcome.err().map(|e| {
                    tracing::warn!(platform = %job.platform, asset = %job.asset, error = %e, "transform failed");
                    self.reporter.error(&format!("{}: {}", job.asset, e));
                    e.to_string()
                });
                AssetResult {
                    platform: job.platform,
                    asset: job.asset,
                    destination: job.op.destination,
                    error,
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("executor", &self.executor)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

fn batch_header(kind: AssetKind, platform: &str) -> String {
    match kind {
        AssetKind::Icon => format!("Generating Icons for {platform}"),
        AssetKind::Splash => format!("Generating splash screen for {platform}"),
    }
}
