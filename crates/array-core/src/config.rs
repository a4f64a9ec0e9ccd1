use crate::constants::{DEFAULT_HEIGHT_MM, DEFAULT_WIDTH_MM, MM_PER_METER};

/// Parses a free-form millimeter field, substituting `default_mm` when the
/// text is empty, non-numeric, non-finite, zero or negative.
pub fn parse_mm(text: &str, default_mm: f32) -> f32 {
    let trimmed = text.trim();
    match trimmed.parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => {
            log::debug!(
                "[config] {:?} is not a usable length, using {} mm",
                trimmed,
                default_mm
            );
            default_mm
        }
    }
}

/// Target dimensions of the array, in scene units (meters).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrayConfig {
    pub desired_width: f32,
    pub desired_height: f32,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::from_millimeters(DEFAULT_WIDTH_MM, DEFAULT_HEIGHT_MM)
    }
}

impl ArrayConfig {
    pub fn from_millimeters(width_mm: f32, height_mm: f32) -> Self {
        Self {
            desired_width: width_mm / MM_PER_METER,
            desired_height: height_mm / MM_PER_METER,
        }
    }

    /// Builds a config from the raw text of the width and height fields.
    pub fn from_inputs(width_text: &str, height_text: &str) -> Self {
        Self::from_millimeters(
            parse_mm(width_text, DEFAULT_WIDTH_MM),
            parse_mm(height_text, DEFAULT_HEIGHT_MM),
        )
    }

    pub fn width_mm(&self) -> f32 {
        self.desired_width * MM_PER_METER
    }

    pub fn height_mm(&self) -> f32 {
        self.desired_height * MM_PER_METER
    }
}
