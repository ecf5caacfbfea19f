use serde::{Deserialize, Serialize};

use crate::core::{
    AngleSpan, ChartMetrics, HitResult, find_active_index, is_inside_bounds, pointer_angle_deg,
};

/// Public tooltip state exposed to host applications.
///
/// The anchor is the last pointer position in window coordinates; hosts place
/// the tooltip overlay there when `visible` is true.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// Hover-interaction state for one chart instance.
///
/// Every pointer event fully recomputes the hit result from the current spans
/// and layout; nothing here is derived incrementally, so the transition
/// functions are trivially replayable in tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    cursor_x: f64,
    cursor_y: f64,
    pointer_angle_deg: f64,
    hit: HitResult,
    tooltip_visible: bool,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            cursor_x: 0.0,
            cursor_y: 0.0,
            pointer_angle_deg: 0.0,
            hit: HitResult::default(),
            tooltip_visible: false,
        }
    }
}

impl HoverState {
    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn pointer_angle_deg(self) -> f64 {
        self.pointer_angle_deg
    }

    #[must_use]
    pub fn hit(self) -> HitResult {
        self.hit
    }

    #[must_use]
    pub fn tooltip_visible(self) -> bool {
        self.tooltip_visible
    }

    #[must_use]
    pub fn tooltip(self) -> TooltipState {
        TooltipState {
            visible: self.tooltip_visible,
            x: self.cursor_x,
            y: self.cursor_y,
        }
    }

    /// Recomputes hover state for a pointer position in window coordinates.
    ///
    /// The tooltip is visible only when the cursor is inside the chart circle
    /// and its angle falls within an assigned wedge; hovering the unassigned
    /// gap of a partial sweep shows nothing.
    pub fn on_pointer_move(
        &mut self,
        x: f64,
        y: f64,
        metrics: ChartMetrics,
        spans: &[AngleSpan],
    ) {
        let (rel_x, rel_y) = metrics.relative_to_center(x, y);
        let angle = pointer_angle_deg(rel_x, rel_y);
        let hit = HitResult {
            inside_bounds: is_inside_bounds(rel_x, rel_y, metrics.radius),
            active_index: find_active_index(spans, angle),
        };

        self.cursor_x = x;
        self.cursor_y = y;
        self.pointer_angle_deg = angle;
        self.hit = hit;
        self.tooltip_visible = hit.inside_bounds && hit.active_index.is_some();
    }

    /// Hides the tooltip and clears the hit, independent of the last-known
    /// pointer position.
    pub fn on_pointer_leave(&mut self) {
        self.hit = HitResult::default();
        self.tooltip_visible = false;
    }
}
