use kronopendia::api::{TimelineEngine, TimelineEngineConfig, TimelineStyle};
use kronopendia::core::{SpokeCategory, TimeScope, Viewport};
use kronopendia::interaction::CrosshairMode;
use kronopendia::render::{Color, NullRenderer, TimelineLayer};

fn build_engine() -> TimelineEngine<NullRenderer> {
    let config = TimelineEngineConfig::new(Viewport::new(1200, 400));
    TimelineEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn render_hands_validated_frame_to_renderer() {
    let mut engine = build_engine();
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert!(renderer.last_line_count > 0);
    assert!(renderer.last_text_count > 0);

    let frame = renderer.last_frame.as_ref().expect("frame");
    assert_eq!(frame.viewport, Viewport::new(1200, 400));
    assert_eq!(frame.texts_matching("Present").count(), 1);
    assert_eq!(frame.texts_matching("13.8 Bya").count(), 1);
}

#[test]
fn every_tick_point_gets_one_spoke() {
    let engine = build_engine();
    let points = engine.tick_points();
    let frame = engine.build_layered_frame();

    let spokes = frame.layer(TimelineLayer::Spokes).expect("spokes layer");
    assert_eq!(spokes.lines.len(), points.len());
    assert_eq!(spokes.texts.len(), points.len());
    assert!(spokes.lines.iter().all(|line| line.is_vertical()));
}

#[test]
fn special_spokes_are_longest() {
    let engine = build_engine();
    let style = engine.style();
    let frame = engine.build_layered_frame();
    let spokes = frame.layer(TimelineLayer::Spokes).expect("spokes layer");

    let special = style.spoke_heights_px.for_category(SpokeCategory::Special);
    let longest = spokes
        .lines
        .iter()
        .map(|line| line.y2 - line.y1)
        .fold(0.0_f64, f64::max);
    assert!((longest - special).abs() <= 1e-9);
}

#[test]
fn label_threshold_hides_minor_spoke_labels() {
    let mut engine = build_engine();
    engine
        .set_style(TimelineStyle {
            label_min_category: SpokeCategory::Special,
            ..TimelineStyle::default()
        })
        .expect("style");

    let frame = engine.build_layered_frame();
    let spokes = frame.layer(TimelineLayer::Spokes).expect("spokes layer");
    let labels: Vec<&str> = spokes.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, ["13.8 Bya", "Present"]);
}

#[test]
fn resting_spine_has_no_end_caps() {
    let engine = build_engine();
    let frame = engine.build_layered_frame();
    let spine = frame.layer(TimelineLayer::Spine).expect("spine layer");

    assert_eq!(spine.lines.len(), 1);
    let line = spine.lines[0];
    assert!((line.x1 - 200.0).abs() <= 1e-6);
    assert!((line.x2 - 1000.0).abs() <= 1e-6);
    assert!((line.y1 - 200.0).abs() <= 1e-9);
}

#[test]
fn zoomed_spine_draws_chevrons_toward_hidden_bounds() {
    let mut engine = build_engine();
    engine
        .set_scope(TimeScope::new(8e9, 4e9))
        .expect("scope");

    let frame = engine.build_layered_frame();
    let spine = frame.layer(TimelineLayer::Spine).expect("spine layer");

    // One segment plus two strokes per cap.
    assert_eq!(spine.lines.len(), 5);
    assert_eq!((spine.lines[0].x1, spine.lines[0].x2), (0.0, 1200.0));
    assert!(spine.lines[1..].iter().any(|line| line.x2 == 0.0));
    assert!(spine.lines[1..].iter().any(|line| line.x2 == 1200.0));
}

#[test]
fn crosshair_rests_dimmed_at_center_without_cursor() {
    let engine = build_engine();
    let style = engine.style();
    let frame = engine.build_layered_frame();
    let crosshair = frame.layer(TimelineLayer::Crosshair).expect("crosshair");

    assert_eq!(crosshair.lines.len(), 4);
    let vertical = crosshair.lines[0];
    assert!((vertical.x1 - 600.0).abs() <= 1e-9);
    assert!(vertical.color.alpha < style.crosshair_color.alpha);
}

#[test]
fn crosshair_follows_cursor_at_full_alpha() {
    let mut engine = build_engine();
    engine.pointer_move(300.0, 120.0);

    let style = engine.style();
    let frame = engine.build_layered_frame();
    let crosshair = frame.layer(TimelineLayer::Crosshair).expect("crosshair");

    let vertical = crosshair.lines[0];
    assert!((vertical.x1 - 300.0).abs() <= 1e-6);
    assert_eq!(vertical.color, style.crosshair_color);
}

#[test]
fn hidden_crosshair_mode_skips_crosshair_layer() {
    let mut engine = build_engine();
    engine.set_crosshair_mode(CrosshairMode::Hidden);
    engine.pointer_move(300.0, 120.0);

    let frame = engine.build_layered_frame();
    let crosshair = frame.layer(TimelineLayer::Crosshair).expect("crosshair");
    assert!(crosshair.is_empty());
}

#[test]
fn readout_reports_range_bounds_and_focus() {
    let mut engine = build_engine();
    engine
        .set_scope(TimeScope::new(600e6, 100e6))
        .expect("scope");

    let frame = engine.build_render_frame();
    for expected in [
        "Range: 500.00 My",
        "Left: 600.00 Mya",
        "Center: 350.00 Mya",
        "Right: 100.00 Mya",
    ] {
        assert_eq!(
            frame.texts_matching(expected).count(),
            1,
            "missing readout {expected}"
        );
    }

    engine.pointer_move(300.0, 50.0);
    let frame = engine.build_render_frame();
    assert_eq!(frame.texts_matching("Cursor: 475.00 Mya").count(), 1);
}

#[test]
fn resting_readout_shows_max_bounds() {
    let engine = build_engine();
    let frame = engine.build_render_frame();
    assert_eq!(frame.texts_matching("Range: MAX").count(), 1);
    assert_eq!(frame.texts_matching("Left: MAX").count(), 1);
    assert_eq!(frame.texts_matching("Right: MAX").count(), 1);
    assert_eq!(frame.texts_matching("Center: 6.90 Bya").count(), 1);
}

#[test]
fn style_toggles_background_and_readout() {
    let mut engine = build_engine();
    engine
        .set_style(TimelineStyle {
            background_color: Some(Color::rgb(0.0, 0.0, 0.0)),
            show_readout: false,
            ..TimelineStyle::default()
        })
        .expect("style");

    let frame = engine.build_layered_frame();
    let background = frame.layer(TimelineLayer::Background).expect("background");
    assert_eq!(background.rects.len(), 1);
    assert_eq!(background.rects[0].width, 1200.0);
    assert!(frame.layer(TimelineLayer::Readout).expect("readout").is_empty());
}

#[test]
fn readout_box_carries_styled_border() {
    let mut engine = build_engine();
    let frame = engine.build_layered_frame();
    let readout = frame.layer(TimelineLayer::Readout).expect("readout");
    assert_eq!(readout.rects.len(), 1);
    assert_eq!(readout.rects[0].border_width, 1.0);
    assert_eq!(
        readout.rects[0].border_color,
        TimelineStyle::default().readout_border_color
    );

    let border_color = Color::rgb(1.0, 0.0, 0.0);
    engine
        .set_style(TimelineStyle {
            readout_border_color: border_color,
            readout_border_width: 2.5,
            ..TimelineStyle::default()
        })
        .expect("style");
    let frame = engine.build_layered_frame();
    let rect = frame.layer(TimelineLayer::Readout).expect("readout").rects[0];
    assert_eq!(rect.border_width, 2.5);
    assert_eq!(rect.border_color, border_color);

    let err = engine.set_style(TimelineStyle {
        readout_border_width: -1.0,
        ..TimelineStyle::default()
    });
    assert!(err.is_err());
}

#[test]
fn invalid_style_is_rejected() {
    let mut engine = build_engine();
    let err = engine.set_style(TimelineStyle {
        spoke_label_font_size_px: 0.0,
        ..TimelineStyle::default()
    });
    assert!(err.is_err());

    let err = engine.set_style(TimelineStyle {
        crosshair_color: Color::rgba(1.0, 1.0, 1.0, 2.0),
        ..TimelineStyle::default()
    });
    assert!(err.is_err());
    assert_eq!(engine.style(), TimelineStyle::default());
}

#[test]
fn off_screen_spokes_are_still_emitted() {
    let mut engine = build_engine();
    engine
        .set_scope(TimeScope::new(2e9, 1e9))
        .expect("scope");

    let frame = engine.build_render_frame();
    assert!(frame.validate().is_ok());
    let origin = frame
        .texts_matching("13.8 Bya")
        .next()
        .expect("origin label");
    assert!(origin.x < 0.0);
}
