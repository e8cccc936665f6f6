use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_VISUAL_SCOPE, TimeScope, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::CrosshairMode;

use super::validation::{
    validate_edge_behavior, validate_pan_behavior, validate_scope, validate_viewport,
    validate_zoom_behavior,
};
use super::{EdgeBehavior, PanBehavior, TickDensity, ZoomBehavior};

fn default_scope() -> TimeScope {
    DEFAULT_VISUAL_SCOPE
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep timeline setup in a JSON file; every field
/// except the viewport falls back to its default when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub viewport: Viewport,
    /// Resting scope, also the clamp bound for zoom.
    #[serde(default = "default_scope")]
    pub default_scope: TimeScope,
    #[serde(default)]
    pub zoom_behavior: ZoomBehavior,
    #[serde(default)]
    pub pan_behavior: PanBehavior,
    #[serde(default)]
    pub edge_behavior: EdgeBehavior,
    #[serde(default)]
    pub crosshair_mode: CrosshairMode,
    #[serde(default)]
    pub tick_density: TickDensity,
}

impl TimelineEngineConfig {
    /// Creates a config with default behaviors for the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            default_scope: DEFAULT_VISUAL_SCOPE,
            zoom_behavior: ZoomBehavior::default(),
            pan_behavior: PanBehavior::default(),
            edge_behavior: EdgeBehavior::default(),
            crosshair_mode: CrosshairMode::default(),
            tick_density: TickDensity::default(),
        }
    }

    #[must_use]
    pub fn with_default_scope(mut self, scope: TimeScope) -> Self {
        self.default_scope = scope;
        self
    }

    #[must_use]
    pub fn with_zoom_behavior(mut self, behavior: ZoomBehavior) -> Self {
        self.zoom_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_pan_behavior(mut self, behavior: PanBehavior) -> Self {
        self.pan_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_edge_behavior(mut self, behavior: EdgeBehavior) -> Self {
        self.edge_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_crosshair_mode(mut self, mode: CrosshairMode) -> Self {
        self.crosshair_mode = mode;
        self
    }

    #[must_use]
    pub fn with_tick_density(mut self, density: TickDensity) -> Self {
        self.tick_density = density;
        self
    }

    pub fn validate(self) -> TimelineResult<Self> {
        validate_viewport(self.viewport)?;
        validate_scope(self.default_scope)?;
        validate_zoom_behavior(self.zoom_behavior)?;
        validate_pan_behavior(self.pan_behavior)?;
        validate_edge_behavior(self.edge_behavior)?;
        Ok(self)
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse engine config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }
}
