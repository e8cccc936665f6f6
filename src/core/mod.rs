pub mod label_format;
pub mod time_points;
pub mod time_scale;
pub mod types;

pub use label_format::{ValueKind, format_sub_year, format_tick_label, format_time_value};
pub use time_points::{SpokeCategory, TimePoint, generate_tick_points};
pub use time_scale::{
    DEFAULT_VISUAL_SCOPE, EDGE_PADDING_RATIO, PADDING_FACTOR, PADDING_YEARS, UNIVERSE_AGE_YEARS,
    UNIVERSE_SCOPE, ZOOM_OUT_SNAP_RATIO, clamp_to_universe, pixel_to_years_bp, years_to_pixel,
    years_to_position_percent, years_to_position_ratio,
};
pub use types::{TimeScope, Viewport};
