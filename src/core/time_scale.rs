//! Conversions between the year domain and the display domain.
//!
//! Every function here is pure and infallible. Degenerate inputs (zero-width
//! scopes, non-positive pixel widths) collapse to the scope's left edge
//! instead of producing `NaN`/`inf`.

use super::TimeScope;

/// Age of the universe in years.
pub const UNIVERSE_AGE_YEARS: f64 = 13.8e9;

/// Extra room on each side of the universe bound in the resting view.
pub const PADDING_FACTOR: f64 = 0.25;

pub const PADDING_YEARS: f64 = UNIVERSE_AGE_YEARS * PADDING_FACTOR;

/// Strict valid bound: universe origin to present.
pub const UNIVERSE_SCOPE: TimeScope = TimeScope::new(UNIVERSE_AGE_YEARS, 0.0);

/// Resting scope: the universe bound padded on both sides.
pub const DEFAULT_VISUAL_SCOPE: TimeScope =
    TimeScope::new(UNIVERSE_AGE_YEARS + PADDING_YEARS, -PADDING_YEARS);

/// Fraction of the viewport kept free between a landmark endpoint and the edge.
pub const EDGE_PADDING_RATIO: f64 = 0.1;

/// Zoom-out snaps to the resting scope once the width reaches this share of it.
pub const ZOOM_OUT_SNAP_RATIO: f64 = 0.9;

/// Position of `years_bp` within `scope`, in percent from the left edge.
///
/// Not clamped: points outside the scope map below 0 or above 100 so the
/// renderer can place them off-screen while zoomed.
#[must_use]
pub fn years_to_position_percent(years_bp: f64, scope: TimeScope) -> f64 {
    years_to_position_ratio(years_bp, scope) * 100.0
}

/// Same as [`years_to_position_percent`] in the `0..=1` convention.
#[must_use]
pub fn years_to_position_ratio(years_bp: f64, scope: TimeScope) -> f64 {
    let width = scope.width();
    if width == 0.0 || !width.is_finite() {
        return 0.0;
    }
    (scope.start - years_bp) / width
}

#[must_use]
pub fn years_to_pixel(years_bp: f64, total_width_px: f64, scope: TimeScope) -> f64 {
    years_to_position_ratio(years_bp, scope) * total_width_px
}

/// Inverse of [`years_to_pixel`].
#[must_use]
pub fn pixel_to_years_bp(pixel_x: f64, total_width_px: f64, scope: TimeScope) -> f64 {
    if total_width_px <= 0.0 || !total_width_px.is_finite() {
        return scope.start;
    }
    scope.start - (pixel_x / total_width_px) * scope.width()
}

/// Clamps a year value into the strict universe bound.
#[must_use]
pub fn clamp_to_universe(years_bp: f64) -> f64 {
    years_bp.clamp(0.0, UNIVERSE_AGE_YEARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_visual_scope_pads_a_quarter_each_side() {
        assert_eq!(DEFAULT_VISUAL_SCOPE.start, 17.25e9);
        assert_eq!(DEFAULT_VISUAL_SCOPE.end, -3.45e9);
    }

    #[test]
    fn zero_width_scope_does_not_produce_nan() {
        let scope = TimeScope::new(5.0, 5.0);
        assert_eq!(years_to_position_percent(1.0, scope), 0.0);
        assert_eq!(pixel_to_years_bp(10.0, 0.0, scope), 5.0);
    }
}
