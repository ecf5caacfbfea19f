use serde::{Deserialize, Serialize};

use crate::core::{AngleSpan, Slice, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, TooltipState};
use crate::render::{Color, Renderer};

use super::PieChartEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub slices: Vec<Slice>,
    pub spans: Vec<AngleSpan>,
    pub colors: Vec<Color>,
    pub hover: HoverState,
    pub tooltip: TooltipState,
}

impl<R: Renderer> PieChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.viewport(),
            slices: self.slices().to_vec(),
            spans: self.spans().to_vec(),
            colors: self.colors().to_vec(),
            hover: self.hover_state(),
            tooltip: self.tooltip(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
