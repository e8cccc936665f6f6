use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{TimeScope, pixel_to_years_bp};
use crate::error::TimelineResult;
use crate::interaction::{CrosshairMode, CursorState, InteractionMode};
use crate::render::Renderer;

use super::validation::{validate_finite, validate_pan_behavior, validate_zoom_behavior};
use super::{PanBehavior, TimelineEngine, ZoomBehavior};

/// One wheel event in host pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelInput {
    pub pointer_x: f64,
    pub delta_x: f64,
    pub delta_y: f64,
    /// Modifier held (e.g. Shift): vertical wheel pans instead of zooming.
    pub pan_modifier: bool,
}

impl WheelInput {
    #[must_use]
    pub fn vertical(pointer_x: f64, delta_y: f64) -> Self {
        Self {
            pointer_x,
            delta_x: 0.0,
            delta_y,
            pan_modifier: false,
        }
    }

    #[must_use]
    pub fn with_pan_modifier(mut self, pan_modifier: bool) -> Self {
        self.pan_modifier = pan_modifier;
        self
    }
}

/// What a wheel event did to the scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WheelOutcome {
    Zoomed(TimeScope),
    Panned(TimeScope),
    Ignored,
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn crosshair_mode(&self) -> CrosshairMode {
        self.interaction.crosshair_mode()
    }

    pub fn set_crosshair_mode(&mut self, mode: CrosshairMode) {
        self.interaction.set_crosshair_mode(mode);
    }

    #[must_use]
    pub fn zoom_behavior(&self) -> ZoomBehavior {
        self.zoom_behavior
    }

    pub fn set_zoom_behavior(&mut self, behavior: ZoomBehavior) -> TimelineResult<()> {
        let behavior = validate_zoom_behavior(behavior)?;
        self.controller
            .set_snap_to_default_ratio(behavior.snap_to_default_ratio)?;
        self.zoom_behavior = behavior;
        Ok(())
    }

    #[must_use]
    pub fn pan_behavior(&self) -> PanBehavior {
        self.pan_behavior
    }

    pub fn set_pan_behavior(&mut self, behavior: PanBehavior) -> TimelineResult<()> {
        self.pan_behavior = validate_pan_behavior(behavior)?;
        Ok(())
    }

    #[must_use]
    pub fn cursor_state(&self) -> CursorState {
        self.interaction.cursor()
    }

    /// Years BP under the pointer, `None` while the pointer is outside.
    #[must_use]
    pub fn cursor_position(&self) -> Option<f64> {
        self.interaction.cursor().years_bp
    }

    /// Tracks the pointer. Positions outside the viewport count as a leave.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let inside = x.is_finite()
            && y.is_finite()
            && (0.0..=self.width_px()).contains(&x)
            && (0.0..=self.viewport.height_px()).contains(&y);
        if !inside {
            self.pointer_leave();
            return;
        }

        let years = pixel_to_years_bp(x, self.width_px(), self.scope());
        self.interaction.on_pointer_move(x, years);
        trace!(x, years, "pointer moved");
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
        trace!("pointer left");
    }

    /// Wheel handling: vertical delta zooms around the pointer (negative
    /// delta zooms in) unless the pan modifier is held; horizontal delta
    /// always pans.
    pub fn wheel(&mut self, input: WheelInput) -> TimelineResult<WheelOutcome> {
        let delta_x = validate_finite(input.delta_x, "wheel delta x")?;
        let delta_y = validate_finite(input.delta_y, "wheel delta y")?;

        let zoom_delta = if input.pan_modifier { 0.0 } else { delta_y };
        if zoom_delta == 0.0 {
            let pan_delta = if input.pan_modifier {
                delta_x + delta_y
            } else {
                delta_x
            };
            if pan_delta == 0.0 || !self.pan_behavior.wheel_pan_enabled {
                return Ok(WheelOutcome::Ignored);
            }
            // Scrolling down/right reveals younger times.
            let scope = self.pan_by_pixels(-pan_delta)?;
            return Ok(WheelOutcome::Panned(scope));
        }

        let step = self.zoom_behavior.wheel_zoom_factor;
        let factor = if zoom_delta < 0.0 { step } else { 1.0 / step };
        let anchor_px = validate_finite(input.pointer_x, "wheel pointer x")?;
        let scope = self.zoom_at_pixel(factor, anchor_px)?;
        Ok(WheelOutcome::Zoomed(scope))
    }

    /// Starts a drag pan at pointer `x`.
    pub fn drag_start(&mut self, x: f64) {
        if !self.pan_behavior.drag_pan_enabled || !x.is_finite() {
            return;
        }
        self.interaction.on_pan_start(x);
    }

    /// Continues a drag: the timeline follows the pointer.
    pub fn drag_move(&mut self, x: f64) -> TimelineResult<Option<TimeScope>> {
        let x = validate_finite(x, "drag x")?;
        let Some(delta_px) = self.interaction.on_pan_move(x) else {
            return Ok(None);
        };
        if delta_px == 0.0 {
            return Ok(None);
        }
        self.pan_by_pixels(delta_px).map(Some)
    }

    pub fn drag_end(&mut self) {
        self.interaction.on_pan_end();
    }

    /// Zooms in around the tracked cursor, or the scope center without one.
    pub fn zoom_in_button(&mut self) -> TimelineResult<TimeScope> {
        let anchor = self.button_zoom_anchor();
        self.zoom_around_years(self.zoom_behavior.button_zoom_factor, anchor)
    }

    pub fn zoom_out_button(&mut self) -> TimelineResult<TimeScope> {
        let anchor = self.button_zoom_anchor();
        self.zoom_around_years(1.0 / self.zoom_behavior.button_zoom_factor, anchor)
    }

    /// Moves the window toward the past by the configured button step.
    pub fn pan_left_button(&mut self) -> TimelineResult<TimeScope> {
        let step = self.button_pan_px()?;
        self.pan_by_pixels(step)
    }

    /// Moves the window toward the present by the configured button step.
    pub fn pan_right_button(&mut self) -> TimelineResult<TimeScope> {
        let step = self.button_pan_px()?;
        self.pan_by_pixels(-step)
    }

    pub fn reset_button(&mut self) -> TimeScope {
        self.reset_scope();
        self.scope()
    }
}
