use kronopendia::core::{
    DEFAULT_VISUAL_SCOPE, SpokeCategory, TimePoint, TimeScope, UNIVERSE_AGE_YEARS,
    generate_tick_points,
};

fn category_of(points: &[TimePoint], years_bp: f64) -> Option<SpokeCategory> {
    points
        .iter()
        .find(|point| point.years_bp == years_bp)
        .map(|point| point.category)
}

#[test]
fn full_ladder_runs_from_origin_to_present() {
    let points = generate_tick_points(None);

    // origin + 13 billion marks + 9 decades of 9 digits + 6 sub-year marks + present
    assert_eq!(points.len(), 102);

    let first = points.first().expect("origin");
    assert_eq!(first.years_bp, UNIVERSE_AGE_YEARS);
    assert_eq!(first.category, SpokeCategory::Special);
    assert_eq!(first.label, "13.8 Bya");

    let last = points.last().expect("present");
    assert_eq!(last.years_bp, 0.0);
    assert_eq!(last.category, SpokeCategory::Special);
    assert_eq!(last.label, "Present");
}

#[test]
fn points_are_strictly_descending_and_unique() {
    let points = generate_tick_points(None);
    for pair in points.windows(2) {
        assert!(
            pair[0].years_bp > pair[1].years_bp,
            "{} should precede {}",
            pair[0].years_bp,
            pair[1].years_bp
        );
    }
}

#[test]
fn decade_marks_carry_tiered_categories() {
    let points = generate_tick_points(None);
    assert_eq!(category_of(&points, 13e9), Some(SpokeCategory::Mega));
    assert_eq!(category_of(&points, 5e8), Some(SpokeCategory::Macro));
    assert_eq!(category_of(&points, 5e7), Some(SpokeCategory::Major));
    assert_eq!(category_of(&points, 2e6), Some(SpokeCategory::Major));
    assert_eq!(category_of(&points, 5e4), Some(SpokeCategory::Minor));
    assert_eq!(category_of(&points, 500.0), Some(SpokeCategory::Micro));
    assert_eq!(category_of(&points, 1.0), Some(SpokeCategory::Micro));
    assert_eq!(category_of(&points, 0.5), Some(SpokeCategory::Micro));
}

#[test]
fn labels_use_compact_units() {
    let points = generate_tick_points(None);
    let labels: Vec<&str> = points.iter().map(|point| point.label.as_str()).collect();
    for expected in [
        "13 Bya", "1 Bya", "900 Mya", "5 Mya", "20 Kya", "300 ya", "1 ya", "6 months",
        "1 month", "1 week", "1 day", "1 hour", "1 minute",
    ] {
        assert!(labels.contains(&expected), "missing label {expected}");
    }
}

#[test]
fn resting_scope_keeps_only_billion_marks() {
    let points = generate_tick_points(Some(DEFAULT_VISUAL_SCOPE));
    assert_eq!(points.len(), 15);
    assert!(
        points
            .iter()
            .all(|point| point.category >= SpokeCategory::Mega)
    );
}

#[test]
fn zoomed_scope_adds_finer_tiers_without_position_filtering() {
    let points = generate_tick_points(Some(TimeScope::new(1e6, 0.0)));

    // origin, present, 13 billion marks, and five decades from 1e8 down to 1e4
    assert_eq!(points.len(), 60);
    assert!(points.iter().any(|point| point.years_bp == 13e9));
    assert!(points.iter().any(|point| point.years_bp == 9e4));
    assert!(points.iter().all(|point| point.years_bp != 500.0));
}

#[test]
fn very_narrow_scope_yields_full_ladder() {
    let narrow = generate_tick_points(Some(TimeScope::new(1e-7, 0.0)));
    let full = generate_tick_points(None);
    assert_eq!(narrow, full);
}
