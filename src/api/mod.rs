mod behavior;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod render_frame_builder;
mod scope_readout;
mod time_scale_controller;
mod timeline_style;
mod validation;
mod zoom_controller;

pub use behavior::{EdgeBehavior, PanBehavior, TickDensity, ZoomBehavior};
pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use engine_snapshot::{
    TIMELINE_SNAPSHOT_JSON_SCHEMA_V1, TimelineSnapshot, TimelineSnapshotJsonContractV1,
};
pub use interaction_controller::{WheelInput, WheelOutcome};
pub use render_frame_builder::{
    SpineCap, SpineGeometry, resolve_crosshair_x, resolve_spine_geometry,
};
pub use scope_readout::{ReadoutFocus, ScopeReadout};
pub use timeline_style::{SpokeHeights, TimelineStyle};
pub use zoom_controller::{ZoomController, enforce_edge_constraints};
