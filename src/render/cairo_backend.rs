use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TooltipPrimitive, WedgePrimitive};

const TOOLTIP_PADDING_PX: f64 = 8.0;
const TOOLTIP_CORNER_RADIUS_PX: f64 = 8.0;
const TOOLTIP_FONT_SIZE_PX: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub wedges_drawn: usize,
    pub tooltips_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        // Highlighted wedge is drawn last so its outline stays on top.
        for wedge in frame.wedges.iter().filter(|wedge| !wedge.highlighted) {
            if draw_wedge(context, wedge)? {
                stats.wedges_drawn += 1;
            }
        }
        for wedge in frame.wedges.iter().filter(|wedge| wedge.highlighted) {
            if draw_wedge(context, wedge)? {
                stats.wedges_drawn += 1;
            }
        }

        if let Some(tooltip) = &frame.tooltip {
            draw_tooltip(context, tooltip)?;
            stats.tooltips_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

/// Fills one arc sector. Returns `false` for zero- or negative-sweep wedges,
/// which have no area and are skipped.
fn draw_wedge(context: &Context, wedge: &WedgePrimitive) -> ChartResult<bool> {
    if wedge.end_angle_deg <= wedge.start_angle_deg {
        return Ok(false);
    }

    append_sector_path(context, wedge);
    apply_color(context, wedge.color);
    if wedge.highlighted {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill wedge", err))?;
        // Brighten the active wedge and ring it so it reads as raised.
        context.set_source_rgba(1.0, 1.0, 1.0, 0.15);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to brighten wedge", err))?;
        context.set_source_rgba(1.0, 1.0, 1.0, 0.9);
        context.set_line_width(2.0);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to outline wedge", err))?;
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill wedge", err))?;
    }

    Ok(true)
}

fn draw_tooltip(context: &Context, tooltip: &TooltipPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {TOOLTIP_FONT_SIZE_PX}"));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&tooltip.text);

    let (text_width, text_height) = layout.pixel_size();
    let box_width = f64::from(text_width) + 2.0 * TOOLTIP_PADDING_PX;
    let box_height = f64::from(text_height) + 2.0 * TOOLTIP_PADDING_PX;

    append_rounded_rect_path(
        context,
        tooltip.x,
        tooltip.y,
        box_width,
        box_height,
        TOOLTIP_CORNER_RADIUS_PX,
    );
    context.set_source_rgba(0.15, 0.15, 0.15, 0.9);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill tooltip box", err))?;

    context.set_source_rgba(1.0, 1.0, 1.0, 1.0);
    context.move_to(tooltip.x + TOOLTIP_PADDING_PX, tooltip.y + TOOLTIP_PADDING_PX);
    pangocairo::functions::show_layout(context, &layout);

    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_sector_path(context: &Context, wedge: &WedgePrimitive) {
    context.new_sub_path();
    context.move_to(wedge.cx, wedge.cy);
    context.arc(
        wedge.cx,
        wedge.cy,
        wedge.radius,
        wedge.start_angle_deg.to_radians(),
        wedge.end_angle_deg.to_radians(),
    );
    context.close_path();
}

fn append_rounded_rect_path(
    context: &Context,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    corner_radius: f64,
) {
    if corner_radius <= 0.0 {
        context.rectangle(x, y, width, height);
        return;
    }

    let radius = corner_radius.min(width * 0.5).min(height * 0.5);
    let left = x;
    let top = y;
    let right = x + width;
    let bottom = y + height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
