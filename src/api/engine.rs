use tracing::debug;

use crate::core::{Viewport, pixel_to_years_bp};
use crate::error::TimelineResult;
use crate::interaction::InteractionState;
use crate::render::{LayeredRenderFrame, RenderFrame, Renderer};

use super::render_frame_builder::{TimelineFrameInput, build_timeline_frame};
use super::validation::{validate_style, validate_viewport};
use super::{
    PanBehavior, TickDensity, TimelineEngineConfig, TimelineStyle, ZoomBehavior, ZoomController,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main facade consumed by host applications.
///
/// `TimelineEngine` owns the scope controller and the pointer state, turns
/// input events into scope changes, and hands render frames to a `Renderer`.
/// All handlers run to completion on the caller's thread.
pub struct TimelineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) controller: ZoomController,
    pub(super) interaction: InteractionState,
    pub(super) zoom_behavior: ZoomBehavior,
    pub(super) pan_behavior: PanBehavior,
    pub(super) tick_density: TickDensity,
    pub(super) style: TimelineStyle,
}

impl<R: Renderer> TimelineEngine<R> {
    /// Creates an engine resting on the configured default scope.
    pub fn new(renderer: R, config: TimelineEngineConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        let controller = ZoomController::new(
            config.default_scope,
            config.zoom_behavior,
            config.edge_behavior,
        )?;
        let mut interaction = InteractionState::default();
        interaction.set_crosshair_mode(config.crosshair_mode);

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            start = config.default_scope.start,
            end = config.default_scope.end,
            "timeline engine initialized"
        );

        Ok(Self {
            renderer,
            viewport: config.viewport,
            controller,
            interaction,
            zoom_behavior: config.zoom_behavior,
            pan_behavior: config.pan_behavior,
            tick_density: config.tick_density,
            style: TimelineStyle::default(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resizes the drawable area. The scope is kept; only the pixel mapping
    /// changes.
    pub fn set_viewport(&mut self, viewport: Viewport) -> TimelineResult<()> {
        self.viewport = validate_viewport(viewport)?;
        self.refresh_cursor();
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> TimelineStyle {
        self.style
    }

    pub fn set_style(&mut self, style: TimelineStyle) -> TimelineResult<()> {
        self.style = validate_style(style)?;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Builds the current frame grouped by layer.
    #[must_use]
    pub fn build_layered_frame(&self) -> LayeredRenderFrame {
        let points = self.tick_points();
        build_timeline_frame(TimelineFrameInput {
            viewport: self.viewport,
            scope: self.controller.scope(),
            points: &points,
            cursor_years_bp: self.cursor_position(),
            crosshair_mode: self.interaction.crosshair_mode(),
            style: self.style,
        })
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        self.build_layered_frame().flatten()
    }

    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer decoupled from
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> TimelineResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn width_px(&self) -> f64 {
        self.viewport.width_px()
    }

    /// Keeps the tracked cursor year in sync after the scope or viewport moved.
    pub(super) fn refresh_cursor(&mut self) {
        let width = self.width_px();
        let scope = self.controller.scope();
        self.interaction
            .refresh_cursor_years(|x| pixel_to_years_bp(x, width, scope));
    }
}
