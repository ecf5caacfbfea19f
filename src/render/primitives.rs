use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from HSV components, hue as a fraction of the
    /// full circle in `[0, 1)` (wrapped otherwise).
    #[must_use]
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let sector = hue.rem_euclid(1.0) * 6.0;
        let f = sector - sector.floor();
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));

        let (red, green, blue) = match sector as u8 % 6 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };

        Self::rgb(red, green, blue)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one filled arc sector in pixel space.
///
/// Angles are degrees swept clockwise from 3 o'clock; a sector whose end does
/// not exceed its start has no area and backends draw nothing for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub color: Color,
    pub highlighted: bool,
}

impl WedgePrimitive {
    #[must_use]
    pub const fn new(
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle_deg: f64,
        end_angle_deg: f64,
        color: Color,
    ) -> Self {
        Self {
            cx,
            cy,
            radius,
            start_angle_deg,
            end_angle_deg,
            color,
            highlighted: false,
        }
    }

    #[must_use]
    pub const fn with_highlight(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite()
            || !self.cy.is_finite()
            || !self.start_angle_deg.is_finite()
            || !self.end_angle_deg.is_finite()
        {
            return Err(ChartError::InvalidData(
                "wedge geometry must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "wedge radius must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for the hover tooltip overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl TooltipPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "tooltip text must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip position must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
