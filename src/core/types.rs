use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One labeled proportion of the chart, as supplied by the caller.
///
/// `fraction` is expected to lie in `[0, 1]`, with all fractions of a dataset
/// summing to at most 1. Nothing enforces that: out-of-range values produce
/// degenerate wedge geometry rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub fraction: f64,
}

impl Slice {
    #[must_use]
    pub fn new(label: impl Into<String>, fraction: f64) -> Self {
        Self {
            label: label.into(),
            fraction,
        }
    }
}

/// Angular extent of one wedge, derived from a `Slice` sequence.
///
/// Angles are degrees swept clockwise from the 3-o'clock direction in screen
/// space. Spans produced by `compute_spans` are contiguous and ordered: each
/// span starts where the previous one ended, and the first starts at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleSpan {
    pub label: String,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
}

impl AngleSpan {
    #[must_use]
    pub fn new(label: impl Into<String>, start_angle_deg: f64, end_angle_deg: f64) -> Self {
        Self {
            label: label.into(),
            start_angle_deg,
            end_angle_deg,
        }
    }

    #[must_use]
    pub fn sweep_deg(&self) -> f64 {
        self.end_angle_deg - self.start_angle_deg
    }
}
