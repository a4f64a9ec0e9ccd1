/// What the loading progress bar should show for a given completion value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressDisplay {
    /// Width of the fill element, in percent.
    pub width_percent: f32,
    /// The whole bar is hidden once loading completes.
    pub hidden: bool,
}

impl ProgressDisplay {
    pub fn from_fraction(fraction: f32) -> Self {
        let f = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Self {
            width_percent: f * 100.0,
            hidden: f >= 1.0,
        }
    }

    /// CSS value for the fill element's `width`.
    pub fn css_width(&self) -> String {
        format!("{}%", self.width_percent)
    }
}
