use crate::core::types::{AngleSpan, Slice};

/// Accumulates proportional slices into contiguous angle spans.
///
/// Each fraction contributes `360 × fraction` degrees, swept in input order
/// starting at 0. The function is total: it performs no validation, so
/// fractions summing to less than 1 leave a trailing gap that belongs to no
/// wedge, and zero or negative fractions yield zero- or negative-width spans.
#[must_use]
pub fn compute_spans(slices: &[Slice]) -> Vec<AngleSpan> {
    let mut spans = Vec::with_capacity(slices.len());
    let mut start_angle = 0.0;

    for slice in slices {
        let end_angle = start_angle + 360.0 * slice.fraction;
        spans.push(AngleSpan::new(slice.label.clone(), start_angle, end_angle));
        start_angle = end_angle;
    }

    spans
}

/// Derives the pointer's polar angle from center-relative coordinates.
///
/// Input coordinates use math orientation (y grows upward); the result is
/// degrees in `[0, 360)` measured clockwise from 3 o'clock in screen space,
/// matching the sweep direction of `compute_spans`.
#[must_use]
pub fn pointer_angle_deg(x: f64, y: f64) -> f64 {
    let raw = -y.atan2(x).to_degrees();
    if raw < 0.0 { raw + 360.0 } else { raw }
}
