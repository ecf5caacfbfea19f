use crate::core::{PaletteSpec, Viewport};
use crate::render::Color;

/// Construction-time settings for `PieChartEngine`.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartEngineConfig {
    pub viewport: Viewport,
    pub palette: PaletteSpec,
}

impl PieChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            palette: PaletteSpec::default(),
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: PaletteSpec) -> Self {
        self.palette = palette;
        self
    }

    /// Selects the seeded random-RGB palette with an explicit seed, so color
    /// assignment stays reproducible across runs.
    #[must_use]
    pub fn with_palette_seed(mut self, seed: u64) -> Self {
        self.palette = PaletteSpec::SeededRgb { seed };
        self
    }

    #[must_use]
    pub fn with_fixed_palette(mut self, colors: Vec<Color>) -> Self {
        self.palette = PaletteSpec::Fixed(colors);
        self
    }
}
