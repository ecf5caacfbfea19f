use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::types::AngleSpan;
use crate::render::Color;

/// Assigns one fill color per wedge.
///
/// Policies are deterministic: the same spans (and, for seeded policies, the
/// same seed) always produce the same colors, so rendering is reproducible
/// and snapshot-testable.
pub trait ColorPolicy {
    fn colors_for(&self, spans: &[AngleSpan]) -> Vec<Color>;
}

/// Derives each wedge color from its start angle on the hue circle.
///
/// Saturation and value are fixed at 0.6 and 0.8. The hue divisor is 365
/// rather than 360; changing it would shift every established shade, so it
/// stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HuePalette;

impl ColorPolicy for HuePalette {
    fn colors_for(&self, spans: &[AngleSpan]) -> Vec<Color> {
        spans
            .iter()
            .map(|span| Color::from_hsv((span.start_angle_deg / 365.0).rem_euclid(1.0), 0.6, 0.8))
            .collect()
    }
}

/// Uniform random RGB per wedge, drawn from a seeded generator.
///
/// One fresh `StdRng` is created per assignment, so a given seed yields the
/// same color sequence every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRgbPalette {
    seed: u64,
}

impl SeededRgbPalette {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    #[must_use]
    pub fn seed(self) -> u64 {
        self.seed
    }
}

impl ColorPolicy for SeededRgbPalette {
    fn colors_for(&self, spans: &[AngleSpan]) -> Vec<Color> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        spans
            .iter()
            .map(|_| {
                Color::rgb(
                    rng.random_range(0.0..=1.0),
                    rng.random_range(0.0..=1.0),
                    rng.random_range(0.0..=1.0),
                )
            })
            .collect()
    }
}

/// Caller-supplied color cycle, repeated when there are more wedges than
/// colors. An empty palette falls back to mid-gray.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPalette {
    colors: Vec<Color>,
}

impl FixedPalette {
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

impl ColorPolicy for FixedPalette {
    fn colors_for(&self, spans: &[AngleSpan]) -> Vec<Color> {
        (0..spans.len())
            .map(|index| match self.colors.len() {
                0 => Color::rgb(0.5, 0.5, 0.5),
                len => self.colors[index % len],
            })
            .collect()
    }
}

/// Declarative palette selection carried by the engine config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaletteSpec {
    Hue,
    SeededRgb { seed: u64 },
    Fixed(Vec<Color>),
}

impl Default for PaletteSpec {
    fn default() -> Self {
        Self::Hue
    }
}

impl PaletteSpec {
    #[must_use]
    pub fn into_policy(self) -> Box<dyn ColorPolicy> {
        match self {
            Self::Hue => Box::new(HuePalette),
            Self::SeededRgb { seed } => Box::new(SeededRgbPalette::new(seed)),
            Self::Fixed(colors) => Box::new(FixedPalette::new(colors)),
        }
    }
}
