use tracing::{debug, trace};

use crate::core::{
    AngleSpan, ChartMetrics, ColorPolicy, HitResult, Slice, Viewport, compute_spans,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, TooltipState};
use crate::render::{Color, RenderFrame, Renderer, TooltipPrimitive, WedgePrimitive};

use super::PieChartEngineConfig;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `PieChartEngine` owns the slice dataset, the angle spans and colors derived
/// from it, and the hover state, and turns them into render frames. All work
/// happens synchronously on the caller's thread, one pointer event at a time.
pub struct PieChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    metrics: ChartMetrics,
    palette: Box<dyn ColorPolicy>,
    slices: Vec<Slice>,
    spans: Vec<AngleSpan>,
    colors: Vec<Color>,
    hover: HoverState,
}

impl<R: Renderer> PieChartEngine<R> {
    pub fn new(renderer: R, config: PieChartEngineConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            renderer,
            viewport: config.viewport,
            metrics: ChartMetrics::from_viewport(config.viewport),
            palette: config.palette.into_policy(),
            slices: Vec::new(),
            spans: Vec::new(),
            colors: Vec::new(),
            hover: HoverState::default(),
        })
    }

    /// Replaces the chart dataset and rederives spans and wedge colors.
    ///
    /// Fractions pass through unvalidated: a sum below 1 leaves an unassigned
    /// trailing gap in the sweep, and that gap never hits a wedge. Hover state
    /// is reset because indices from the previous dataset are meaningless.
    pub fn set_data(&mut self, slices: Vec<Slice>) {
        self.spans = compute_spans(&slices);
        self.colors = self.palette.colors_for(&self.spans);
        let total_sweep = self.spans.last().map_or(0.0, |span| span.end_angle_deg);
        debug!(
            slice_count = slices.len(),
            total_sweep_deg = total_sweep,
            "set chart data"
        );
        self.slices = slices;
        self.hover = HoverState::default();
    }

    /// Updates layout dimensions, e.g. from a host resize callback.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        self.metrics = ChartMetrics::from_viewport(viewport);
        self.hover = HoverState::default();
        Ok(())
    }

    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    #[must_use]
    pub fn spans(&self) -> &[AngleSpan] {
        &self.spans
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn metrics(&self) -> ChartMetrics {
        self.metrics
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn hit_result(&self) -> HitResult {
        self.hover.hit()
    }

    #[must_use]
    pub fn tooltip(&self) -> TooltipState {
        self.hover.tooltip()
    }

    /// Label of the hovered wedge, when the tooltip is showing.
    #[must_use]
    pub fn active_label(&self) -> Option<&str> {
        if !self.hover.tooltip_visible() {
            return None;
        }
        let index = self.hover.hit().active_index?;
        self.slices.get(index).map(|slice| slice.label.as_str())
    }

    /// Handles a pointer-movement event in window coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.hover.on_pointer_move(x, y, self.metrics, &self.spans);
        trace!(
            x,
            y,
            angle_deg = self.hover.pointer_angle_deg(),
            inside = self.hover.hit().inside_bounds,
            "pointer move"
        );
    }

    /// Handles a pointer-exit event: the tooltip is forced hidden regardless
    /// of the last-known position.
    pub fn pointer_leave(&mut self) {
        self.hover.on_pointer_leave();
        trace!("pointer leave");
    }

    /// Materializes the declarative scene for the current state.
    ///
    /// One wedge per span (degenerate spans included, backends skip them),
    /// the hovered wedge flagged for highlight, and the tooltip anchored at
    /// the last pointer position. An active slice with an empty label yields
    /// no tooltip primitive since there is nothing to show.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        let active_index = if self.hover.tooltip_visible() {
            self.hover.hit().active_index
        } else {
            None
        };

        for (index, span) in self.spans.iter().enumerate() {
            let color = self
                .colors
                .get(index)
                .copied()
                .unwrap_or_else(|| Color::rgb(0.5, 0.5, 0.5));
            frame = frame.with_wedge(
                WedgePrimitive::new(
                    self.metrics.center_x,
                    self.metrics.center_y,
                    self.metrics.radius,
                    span.start_angle_deg,
                    span.end_angle_deg,
                    color,
                )
                .with_highlight(active_index == Some(index)),
            );
        }

        if let Some(label) = self.active_label().filter(|label| !label.is_empty()) {
            let (x, y) = self.hover.cursor();
            frame = frame.with_tooltip(TooltipPrimitive::new(label, x, y));
        }

        frame
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
