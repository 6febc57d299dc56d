//! Run report
//!
//! What a generation run attempted and how each asset fared.

use chrono::{DateTime, Utc};
use resgen_catalog::AssetKind;
use serde::Serialize;
use std::path::PathBuf;

/// Overall result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Neither master image exists; nothing was attempted
    NothingToDo,
    /// At least one lane ran; individual assets may still have failed
    Completed,
}

/// Whether a lane ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneStatus {
    /// Master image present, every active platform attempted
    Ran,
    /// Master image missing
    Skipped,
}

/// Outcome of one asset transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetResult {
    /// Platform name
    pub platform: String,
    /// Asset file name
    pub asset: String,
    /// Output file
    pub destination: PathBuf,
    /// Failure cause, `None` on success
    pub error: Option<String>,
}

impl AssetResult {
    /// Whether the asset was produced
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Everything one lane did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneReport {
    /// Icon or splash lane
    pub kind: AssetKind,
    /// Ran or skipped
    pub status: LaneStatus,
    /// Platforms processed, in processing order
    pub platforms: Vec<String>,
    /// Per-asset results, grouped by platform in processing order
    pub assets: Vec<AssetResult>,
}

impl LaneReport {
    /// Report for a lane that is about to run
    #[inline]
    #[must_use]
    pub fn ran(kind: AssetKind) -> Self {
        Self {
            kind,
            status: LaneStatus::Ran,
            platforms: Vec::new(),
            assets: Vec::new(),
        }
    }

    /// Report for a lane whose master image is missing
    #[inline]
    #[must_use]
    pub fn skipped(kind: AssetKind) -> Self {
        Self {
            status: LaneStatus::Skipped,
            ..Self::ran(kind)
        }
    }

    /// Assets attempted
    #[inline]
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.assets.len()
    }

    /// Assets that failed
    #[must_use]
    pub fn failed(&self) -> usize {
        self.assets.iter().filter(|a| !a.is_success()).count()
    }

    /// Assets produced
    #[inline]
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.attempted() - self.failed()
    }
}

/// Result of a full generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Overall outcome
    pub outcome: RunOutcome,
    /// Icon lane
    pub icons: LaneReport,
    /// Splash lane
    pub splashes: LaneReport,
    /// Run start
    pub started_at: DateTime<Utc>,
    /// Run end
    pub finished_at: DateTime<Utc>,
}

impl GenerationReport {
    /// Report for a run where no master image exists
    #[must_use]
    pub fn nothing_to_do(started_at: DateTime<Utc>) -> Self {
        Self {
            outcome: RunOutcome::NothingToDo,
            icons: LaneReport::skipped(AssetKind::Icon),
            splashes: LaneReport::skipped(AssetKind::Splash),
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Lane report by kind
    #[inline]
    #[must_use]
    pub fn lane(&self, kind: AssetKind) -> &LaneReport {
        match kind {
            AssetKind::Icon => &self.icons,
            AssetKind::Splash => &self.splashes,
        }
    }

    /// Assets attempted across both lanes
    #[inline]
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.icons.attempted() + self.splashes.attempted()
    }

    /// Assets failed across both lanes
    #[inline]
    #[must_use]
    pub fn failed(&self) -> usize {
        self.icons.failed() + self.splashes.failed()
    }
}
