use approx::{assert_abs_diff_eq, assert_relative_eq};
use kronopendia::core::{
    DEFAULT_VISUAL_SCOPE, PADDING_YEARS, TimeScope, UNIVERSE_AGE_YEARS, UNIVERSE_SCOPE,
    clamp_to_universe, pixel_to_years_bp, years_to_pixel, years_to_position_percent,
};

#[test]
fn default_scope_maps_viewport_edges_to_padded_bounds() {
    assert_eq!(pixel_to_years_bp(0.0, 1000.0, DEFAULT_VISUAL_SCOPE), 17.25e9);
    assert_eq!(pixel_to_years_bp(1000.0, 1000.0, DEFAULT_VISUAL_SCOPE), -3.45e9);
}

#[test]
fn default_scope_is_universe_padded_by_a_quarter() {
    assert_eq!(PADDING_YEARS, 3.45e9);
    assert_eq!(DEFAULT_VISUAL_SCOPE.start, UNIVERSE_SCOPE.start + PADDING_YEARS);
    assert_eq!(DEFAULT_VISUAL_SCOPE.end, UNIVERSE_SCOPE.end - PADDING_YEARS);
    assert_relative_eq!(DEFAULT_VISUAL_SCOPE.width(), 20.7e9);
}

#[test]
fn landmarks_render_at_sixth_marks_of_default_scope() {
    let origin = years_to_position_percent(UNIVERSE_AGE_YEARS, DEFAULT_VISUAL_SCOPE);
    let present = years_to_position_percent(0.0, DEFAULT_VISUAL_SCOPE);
    assert_abs_diff_eq!(origin, 100.0 / 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(present, 500.0 / 6.0, epsilon = 1e-9);
}

#[test]
fn positions_outside_scope_are_not_clamped() {
    let scope = TimeScope::new(8e9, 4e9);
    assert_abs_diff_eq!(years_to_position_percent(10e9, scope), -50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(years_to_position_percent(0.0, scope), 200.0, epsilon = 1e-9);
}

#[test]
fn pixel_and_years_round_trip() {
    let scope = TimeScope::new(600e6, 100e6);
    for px in [0.0, 1.0, 123.5, 640.0, 1279.0, 1280.0] {
        let years = pixel_to_years_bp(px, 1280.0, scope);
        let back = years_to_pixel(years, 1280.0, scope);
        assert!((back - px).abs() <= 1e-6, "px={px} back={back}");
    }
}

#[test]
fn degenerate_inputs_fall_back_without_nan() {
    let flat = TimeScope::new(1e9, 1e9);
    assert_eq!(years_to_position_percent(5e8, flat), 0.0);
    assert_eq!(years_to_pixel(5e8, 1000.0, flat), 0.0);

    assert_eq!(pixel_to_years_bp(400.0, 0.0, DEFAULT_VISUAL_SCOPE), 17.25e9);
    assert_eq!(pixel_to_years_bp(400.0, -5.0, DEFAULT_VISUAL_SCOPE), 17.25e9);
}

#[test]
fn clamp_to_universe_bounds_values() {
    assert_eq!(clamp_to_universe(20e9), UNIVERSE_AGE_YEARS);
    assert_eq!(clamp_to_universe(-1.0), 0.0);
    assert_eq!(clamp_to_universe(5e9), 5e9);
}
