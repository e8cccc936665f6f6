use tracing::{debug, trace, warn};

use crate::core::{
    DEFAULT_VISUAL_SCOPE, TimeScope, UNIVERSE_AGE_YEARS, clamp_to_universe, pixel_to_years_bp,
    years_to_position_ratio,
};
use crate::error::{TimelineError, TimelineResult};

use super::validation::{
    validate_edge_behavior, validate_finite, validate_positive, validate_scope,
    validate_zoom_behavior,
};
use super::{EdgeBehavior, ZoomBehavior};

/// Owner of the visible scope.
///
/// Every gesture goes through [`zoom`](Self::zoom) or [`pan`](Self::pan):
/// the next scope is computed from the current one, corrected, and committed
/// before the call returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomController {
    scope: TimeScope,
    default_scope: TimeScope,
    snap_to_default_ratio: f64,
    edge_behavior: EdgeBehavior,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            scope: DEFAULT_VISUAL_SCOPE,
            default_scope: DEFAULT_VISUAL_SCOPE,
            snap_to_default_ratio: ZoomBehavior::default().snap_to_default_ratio,
            edge_behavior: EdgeBehavior::default(),
        }
    }
}

impl ZoomController {
    /// Creates a controller resting on `default_scope`.
    pub fn new(
        default_scope: TimeScope,
        zoom_behavior: ZoomBehavior,
        edge_behavior: EdgeBehavior,
    ) -> TimelineResult<Self> {
        let default_scope = validate_scope(default_scope)?;
        let zoom_behavior = validate_zoom_behavior(zoom_behavior)?;
        let edge_behavior = validate_edge_behavior(edge_behavior)?;
        Ok(Self {
            scope: default_scope,
            default_scope,
            snap_to_default_ratio: zoom_behavior.snap_to_default_ratio,
            edge_behavior,
        })
    }

    #[must_use]
    pub fn scope(&self) -> TimeScope {
        self.scope
    }

    #[must_use]
    pub fn default_scope(&self) -> TimeScope {
        self.default_scope
    }

    #[must_use]
    pub fn is_at_default(&self) -> bool {
        self.scope == self.default_scope
    }

    #[must_use]
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge_behavior
    }

    pub fn set_edge_behavior(&mut self, behavior: EdgeBehavior) -> TimelineResult<()> {
        self.edge_behavior = validate_edge_behavior(behavior)?;
        Ok(())
    }

    pub fn set_snap_to_default_ratio(&mut self, ratio: f64) -> TimelineResult<()> {
        let behavior = validate_zoom_behavior(ZoomBehavior {
            snap_to_default_ratio: ratio,
            ..ZoomBehavior::default()
        })?;
        self.snap_to_default_ratio = behavior.snap_to_default_ratio;
        Ok(())
    }

    /// Replaces the scope as-is, without edge correction.
    pub fn set_scope(&mut self, scope: TimeScope) -> TimelineResult<()> {
        self.scope = validate_scope(scope)?;
        debug!(start = scope.start, end = scope.end, "set scope");
        Ok(())
    }

    pub fn reset(&mut self) {
        self.scope = self.default_scope;
        debug!("reset scope to default");
    }

    /// Zooms around an anchor and commits the resulting scope.
    ///
    /// The anchor is `explicit_zoom_point` when given, otherwise the year
    /// under `pixel_position` clamped to the universe bound. `zoom_factor > 1`
    /// zooms in. A zoom-out that reaches the snap threshold returns exactly
    /// to the default scope.
    pub fn zoom(
        &mut self,
        pixel_position: f64,
        total_width: f64,
        zoom_factor: f64,
        explicit_zoom_point: Option<f64>,
    ) -> TimelineResult<TimeScope> {
        validate_positive(zoom_factor, "zoom factor")?;
        validate_positive(total_width, "zoom viewport width")?;
        let zoom_point = match explicit_zoom_point {
            Some(point) => validate_finite(point, "zoom point")?,
            None => {
                let pixel_position = validate_finite(pixel_position, "zoom pixel position")?;
                clamp_to_universe(pixel_to_years_bp(pixel_position, total_width, self.scope))
            }
        };

        let current_width = self.scope.width();
        let new_width = current_width / zoom_factor;

        let default_width = self.default_scope.width();
        if zoom_factor < 1.0 && new_width >= default_width * self.snap_to_default_ratio {
            debug!(new_width, default_width, "zoom out snapped to default scope");
            self.scope = self.default_scope;
            return Ok(self.scope);
        }

        let relative_position = (self.scope.start - zoom_point) / current_width;
        let new_start = zoom_point + relative_position * new_width;
        let new_end = new_start - new_width;
        trace!(zoom_point, relative_position, new_start, new_end, "zoom target");

        let bounds = self.default_scope;
        let clamped = TimeScope::new(
            new_start.max(bounds.end).min(bounds.start),
            new_end.min(bounds.start).max(bounds.end),
        );
        let next = self.settle(clamped);
        self.commit(next, "zoom")
    }

    /// Shifts the window by `delta_pixels / total_width` of its width.
    ///
    /// Positive deltas move the window toward the past. The window never
    /// leaves the default scope: a pan past either bound stops there.
    pub fn pan(&mut self, delta_pixels: f64, total_width: f64) -> TimelineResult<TimeScope> {
        let delta_pixels = validate_finite(delta_pixels, "pan delta")?;
        validate_positive(total_width, "pan viewport width")?;

        let pan_years = delta_pixels / total_width * self.scope.width();
        if !pan_years.is_finite() {
            return Err(TimelineError::InvalidData(
                "computed pan delta years must be finite".to_owned(),
            ));
        }

        let next = self.settle(self.scope.shifted(pan_years));
        self.commit(next, "pan")
    }

    /// Applies the configured edge constraints to `scope` without committing.
    #[must_use]
    pub fn enforce_edge_constraints(&self, scope: TimeScope) -> TimeScope {
        if !self.edge_behavior.enabled {
            return scope;
        }
        enforce_edge_constraints(scope, self.edge_behavior.edge_padding_ratio)
    }

    /// Translates `scope` back inside the default scope, keeping its width
    /// unless it is wider than the default.
    fn confine_to_default(&self, scope: TimeScope) -> TimeScope {
        let bounds = self.default_scope;
        let width = scope.width();
        if scope.start > bounds.start {
            trace!(start = scope.start, "window past the older bound");
            TimeScope::new(bounds.start, (bounds.start - width).max(bounds.end))
        } else if scope.end < bounds.end {
            trace!(end = scope.end, "window past the newer bound");
            TimeScope::new((bounds.end + width).min(bounds.start), bounds.end)
        } else {
            scope
        }
    }

    fn settle(&self, scope: TimeScope) -> TimeScope {
        let confined = self.confine_to_default(scope);
        self.confine_to_default(self.enforce_edge_constraints(confined))
    }

    fn commit(&mut self, next: TimeScope, gesture: &'static str) -> TimelineResult<TimeScope> {
        if !next.is_valid() {
            warn!(
                gesture,
                start = next.start,
                end = next.end,
                "discarding degenerate scope"
            );
            return Ok(self.scope);
        }
        self.scope = next;
        debug!(gesture, start = next.start, end = next.end, "scope updated");
        Ok(next)
    }
}

/// Keeps the universe origin and the present out of the edge margins.
///
/// If the origin renders inside the first `edge_padding_ratio` of the
/// viewport it is moved to exactly that mark. Then, on the corrected window,
/// if the present renders inside the last `edge_padding_ratio` it is moved to
/// exactly `1 - edge_padding_ratio`. Both corrections shift the window
/// without changing its width, and run once each in that order: a second
/// violation introduced by the present correction is left as-is.
/// Landmarks outside the viewport are not pulled back in; the controller
/// keeps the window inside its default scope separately.
#[must_use]
pub fn enforce_edge_constraints(scope: TimeScope, edge_padding_ratio: f64) -> TimeScope {
    let width = scope.width();
    if width <= 0.0 || !width.is_finite() {
        return scope;
    }

    let mut adjusted = scope;

    let origin_ratio = years_to_position_ratio(UNIVERSE_AGE_YEARS, adjusted);
    if (0.0..edge_padding_ratio).contains(&origin_ratio) {
        let target_start = UNIVERSE_AGE_YEARS + width * edge_padding_ratio;
        trace!(origin_ratio, target_start, "origin inside left margin");
        adjusted = adjusted.shifted(target_start - adjusted.start);
    }

    let present_ratio = years_to_position_ratio(0.0, adjusted);
    let right_mark = 1.0 - edge_padding_ratio;
    if present_ratio > right_mark && present_ratio <= 1.0 {
        let target_start = width * right_mark;
        trace!(present_ratio, target_start, "present inside right margin");
        adjusted = adjusted.shifted(target_start - adjusted.start);
    }

    adjusted
}

#[cfg(test)]
mod tests {
    use super::{ZoomController, enforce_edge_constraints};
    use crate::core::{DEFAULT_VISUAL_SCOPE, TimeScope, UNIVERSE_AGE_YEARS};

    #[test]
    fn zero_width_scope_passes_through_unchanged() {
        let scope = TimeScope::new(1.0, 1.0);
        assert_eq!(enforce_edge_constraints(scope, 0.1), scope);
    }

    #[test]
    fn explicit_point_outside_bounds_cannot_collapse_scope() {
        let mut controller = ZoomController::default();
        let scope = controller
            .zoom(0.0, 1000.0, 4.0, Some(-1e12))
            .expect("zoom");
        assert!(scope.is_valid());
        assert_eq!(scope, DEFAULT_VISUAL_SCOPE);
    }

    #[test]
    fn snap_ratio_setter_rejects_out_of_range_values() {
        let mut controller = ZoomController::default();
        assert!(controller.set_snap_to_default_ratio(f64::NAN).is_err());
        assert!(controller.set_snap_to_default_ratio(1.5).is_err());
        assert!(controller.set_snap_to_default_ratio(0.0).is_err());
        controller
            .set_snap_to_default_ratio(0.5)
            .expect("valid ratio");
    }

    #[test]
    fn default_scope_is_already_edge_compliant() {
        let scope = enforce_edge_constraints(DEFAULT_VISUAL_SCOPE, 0.1);
        assert_eq!(scope, DEFAULT_VISUAL_SCOPE);
        assert!(DEFAULT_VISUAL_SCOPE.contains(UNIVERSE_AGE_YEARS));
    }
}
