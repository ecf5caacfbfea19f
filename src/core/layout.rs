use crate::core::types::Viewport;

/// Pixel-space placement of the chart circle within a viewport.
///
/// The chart uses the largest circle that fits: diameter `min(width, height)`,
/// centered in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMetrics {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl ChartMetrics {
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            radius: width.min(height) / 2.0,
        }
    }

    /// Converts a window-space pointer position into center-relative math
    /// coordinates (y grows upward), the frame expected by the hit tester.
    #[must_use]
    pub fn relative_to_center(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.center_x, -(y - self.center_y))
    }
}
