use crate::core::{
    TimePoint, TimeScope, clamp_to_universe, generate_tick_points, pixel_to_years_bp,
    years_to_pixel, years_to_position_percent,
};
use crate::error::TimelineResult;
use crate::render::Renderer;

use super::validation::{validate_finite, validate_positive};
use super::{EdgeBehavior, ScopeReadout, TickDensity, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn scope(&self) -> TimeScope {
        self.controller.scope()
    }

    #[must_use]
    pub fn default_scope(&self) -> TimeScope {
        self.controller.default_scope()
    }

    /// Replaces the visible scope as-is (no clamping or edge correction).
    pub fn set_scope(&mut self, scope: TimeScope) -> TimelineResult<()> {
        self.controller.set_scope(scope)?;
        self.refresh_cursor();
        Ok(())
    }

    pub fn reset_scope(&mut self) {
        self.controller.reset();
        self.refresh_cursor();
    }

    #[must_use]
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.controller.edge_behavior()
    }

    pub fn set_edge_behavior(&mut self, behavior: EdgeBehavior) -> TimelineResult<()> {
        self.controller.set_edge_behavior(behavior)
    }

    #[must_use]
    pub fn tick_density(&self) -> TickDensity {
        self.tick_density
    }

    pub fn set_tick_density(&mut self, density: TickDensity) {
        self.tick_density = density;
    }

    pub fn map_years_to_pixel(&self, years_bp: f64) -> TimelineResult<f64> {
        let years_bp = validate_finite(years_bp, "years")?;
        Ok(years_to_pixel(years_bp, self.width_px(), self.scope()))
    }

    pub fn map_pixel_to_years(&self, pixel_x: f64) -> TimelineResult<f64> {
        let pixel_x = validate_finite(pixel_x, "pixel")?;
        Ok(pixel_to_years_bp(pixel_x, self.width_px(), self.scope()))
    }

    pub fn map_years_to_percent(&self, years_bp: f64) -> TimelineResult<f64> {
        let years_bp = validate_finite(years_bp, "years")?;
        Ok(years_to_position_percent(years_bp, self.scope()))
    }

    /// Landmarks for the current scope according to the tick density policy.
    #[must_use]
    pub fn tick_points(&self) -> Vec<TimePoint> {
        match self.tick_density {
            TickDensity::Fixed => generate_tick_points(None),
            TickDensity::Adaptive => generate_tick_points(Some(self.scope())),
        }
    }

    /// Status readout for the current scope and cursor.
    #[must_use]
    pub fn scope_readout(&self) -> ScopeReadout {
        ScopeReadout::resolve(self.scope(), self.cursor_position())
    }

    /// Zooms around the year under `anchor_px` (clamped to the universe bound).
    pub fn zoom_at_pixel(&mut self, factor: f64, anchor_px: f64) -> TimelineResult<TimeScope> {
        let width = self.width_px();
        let scope = self.controller.zoom(anchor_px, width, factor, None)?;
        self.refresh_cursor();
        Ok(scope)
    }

    /// Zooms around an explicit year, used as-is.
    pub fn zoom_around_years(&mut self, factor: f64, anchor_years_bp: f64) -> TimelineResult<TimeScope> {
        let width = self.width_px();
        let scope = self
            .controller
            .zoom(width / 2.0, width, factor, Some(anchor_years_bp))?;
        self.refresh_cursor();
        Ok(scope)
    }

    /// Pans by a pixel delta; positive deltas move toward the past.
    pub fn pan_by_pixels(&mut self, delta_px: f64) -> TimelineResult<TimeScope> {
        let width = self.width_px();
        let scope = self.controller.pan(delta_px, width)?;
        self.refresh_cursor();
        Ok(scope)
    }

    /// Anchor used by the zoom buttons: the tracked cursor, else the center,
    /// clamped to the universe bound.
    pub(super) fn button_zoom_anchor(&self) -> f64 {
        clamp_to_universe(self.cursor_position().unwrap_or_else(|| self.scope().center()))
    }

    pub(super) fn button_pan_px(&self) -> TimelineResult<f64> {
        validate_positive(self.pan_behavior.button_pan_ratio * self.width_px(), "button pan step")
    }
}
