use serde::{Deserialize, Serialize};

use crate::core::{EDGE_PADDING_RATIO, ZOOM_OUT_SNAP_RATIO};

fn default_true() -> bool {
    true
}

/// Zoom step sizes and the zoom-out snap threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBehavior {
    /// Factor applied per wheel notch (`> 1`); wheel-down applies its inverse.
    pub wheel_zoom_factor: f64,
    /// Factor applied by the zoom-in button; zoom-out uses its inverse.
    pub button_zoom_factor: f64,
    /// Zoom-out snaps to the default scope once the width reaches this share of it.
    pub snap_to_default_ratio: f64,
}

impl Default for ZoomBehavior {
    fn default() -> Self {
        Self {
            wheel_zoom_factor: 1.2,
            button_zoom_factor: 1.5,
            snap_to_default_ratio: ZOOM_OUT_SNAP_RATIO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanBehavior {
    /// Pan-button step as a share of the viewport width.
    pub button_pan_ratio: f64,
    /// Allows horizontal wheel deltas and modifier+wheel to pan.
    #[serde(default = "default_true")]
    pub wheel_pan_enabled: bool,
    /// Allows pressed-pointer drag to pan.
    #[serde(default = "default_true")]
    pub drag_pan_enabled: bool,
}

impl Default for PanBehavior {
    fn default() -> Self {
        Self {
            button_pan_ratio: 0.1,
            wheel_pan_enabled: true,
            drag_pan_enabled: true,
        }
    }
}

/// Keeps the universe origin and the present away from the viewport edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeBehavior {
    pub enabled: bool,
    pub edge_padding_ratio: f64,
}

impl Default for EdgeBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            edge_padding_ratio: EDGE_PADDING_RATIO,
        }
    }
}

/// Spoke density policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickDensity {
    /// Always emit the full landmark ladder.
    #[default]
    Fixed,
    /// Drop ladder tiers that are too dense for the current scope.
    Adaptive,
}
