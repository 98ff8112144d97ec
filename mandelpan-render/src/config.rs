use serde::{Deserialize, Serialize};

use mandelpan_core::{EscapeTime, PlaneBounds};

use crate::band::DEFAULT_WORKERS;
use crate::palette::{BandedColoring, CLASSIC, MEMBER_BLACK};

/// Tuning knobs for the render engine.
///
/// Every field has a serde default, so a partial JSON object (or `{}`) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_iteration_cap")]
    pub iteration_cap: u32,
    #[serde(default = "default_worker_count")]
    pub worker_count: usize,
    #[serde(default)]
    pub plane: PlaneBounds,
    /// Color for points that never escape.
    #[serde(default = "default_member_color")]
    pub member_color: [u8; 3],
}

fn default_iteration_cap() -> u32 {
    EscapeTime::DEFAULT_ITERATION_CAP
}
fn default_worker_count() -> usize {
    DEFAULT_WORKERS
}
fn default_member_color() -> [u8; 3] {
    MEMBER_BLACK
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            iteration_cap: default_iteration_cap(),
            worker_count: default_worker_count(),
            plane: PlaneBounds::DEFAULT,
            member_color: default_member_color(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> crate::Result<()> {
        self.plane.validate()?;
        self.evaluator()?;
        Ok(())
    }

    pub fn evaluator(&self) -> crate::Result<EscapeTime> {
        Ok(EscapeTime::new(self.iteration_cap)?)
    }

    pub fn coloring(&self) -> BandedColoring {
        BandedColoring::new(&CLASSIC, self.member_color)
    }
}
