use serde::{Deserialize, Serialize};

/// Drawable surface size in pixels.
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

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Visible time window in years before present.
///
/// `start` is the left (older) edge and `end` the right (younger) edge, so a
/// well-formed scope has `end <= start`. Negative values lie in the future.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScope {
    pub start: f64,
    pub end: f64,
}

impl TimeScope {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Visible span in years.
    #[must_use]
    pub fn width(self) -> f64 {
        self.start - self.end
    }

    #[must_use]
    pub fn center(self) -> f64 {
        self.start - self.width() / 2.0
    }

    #[must_use]
    pub fn contains(self, years_bp: f64) -> bool {
        years_bp <= self.start && years_bp >= self.end
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Finite and ordered with a non-zero span.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.is_finite() && self.start > self.end
    }

    /// Same width, moved by `delta_years` (positive moves toward the past).
    #[must_use]
    pub fn shifted(self, delta_years: f64) -> Self {
        Self {
            start: self.start + delta_years,
            end: self.end + delta_years,
        }
    }
}
