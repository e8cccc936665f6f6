use kronopendia::core::{ValueKind, format_sub_year, format_tick_label, format_time_value};

const DAYS_PER_YEAR: f64 = 365.25;

#[test]
fn readout_values_use_two_decimals_per_magnitude() {
    assert_eq!(format_time_value(13.8e9, ValueKind::Point), "13.80 Bya");
    assert_eq!(format_time_value(6.9e9, ValueKind::Point), "6.90 Bya");
    assert_eq!(format_time_value(250e6, ValueKind::Point), "250.00 Mya");
    assert_eq!(format_time_value(2_500.0, ValueKind::Point), "2.50 Kya");
    assert_eq!(format_time_value(12.0, ValueKind::Point), "12.00 years");
}

#[test]
fn ranges_drop_the_ago_suffix() {
    assert_eq!(format_time_value(500e6, ValueKind::Range), "500.00 My");
    assert_eq!(format_time_value(1.5e9, ValueKind::Range), "1.50 By");
    assert_eq!(format_time_value(4_000.0, ValueKind::Range), "4.00 Ky");
}

#[test]
fn edges_at_or_beyond_universe_bounds_read_max() {
    assert_eq!(format_time_value(13.8e9, ValueKind::Edge), "MAX");
    assert_eq!(format_time_value(17.25e9, ValueKind::Edge), "MAX");
    assert_eq!(format_time_value(0.0, ValueKind::Edge), "MAX");
    assert_eq!(format_time_value(-3.45e9, ValueKind::Edge), "MAX");
    assert_eq!(format_time_value(5e9, ValueKind::Edge), "5.00 Bya");
}

#[test]
fn sub_year_values_use_whole_calendar_units() {
    assert_eq!(format_time_value(0.5, ValueKind::Point), "6 months");
    assert_eq!(format_time_value(14.0 / DAYS_PER_YEAR, ValueKind::Range), "2 weeks");
    assert_eq!(format_sub_year(3.0 / DAYS_PER_YEAR), "3 days");
    assert_eq!(format_sub_year(45.0 / (DAYS_PER_YEAR * 24.0 * 60.0)), "45 minutes");
    assert_eq!(format_sub_year(0.0), "0 years");
    assert_eq!(format_sub_year(-0.25), "-3 months");
}

#[test]
fn tick_labels_are_compact() {
    assert_eq!(format_tick_label(13.8e9), "13.8 Bya");
    assert_eq!(format_tick_label(13e9), "13 Bya");
    assert_eq!(format_tick_label(1.5e9), "1.5 Bya");
    assert_eq!(format_tick_label(500e6), "500 Mya");
    assert_eq!(format_tick_label(5_000.0), "5 Kya");
    assert_eq!(format_tick_label(500.0), "500 ya");
    assert_eq!(format_tick_label(0.0), "Present");
    assert_eq!(format_tick_label(-2e9), "-2 Bya");
}

#[test]
fn tick_labels_below_a_year_use_singular_units() {
    assert_eq!(format_tick_label(0.5), "6 months");
    assert_eq!(format_tick_label(1.0 / 12.0), "1 month");
    assert_eq!(format_tick_label(7.0 / DAYS_PER_YEAR), "1 week");
    assert_eq!(format_tick_label(1.0 / DAYS_PER_YEAR), "1 day");
    assert_eq!(format_tick_label(1.0 / (DAYS_PER_YEAR * 24.0)), "1 hour");
    assert_eq!(
        format_tick_label(1.0 / (DAYS_PER_YEAR * 24.0 * 60.0)),
        "1 minute"
    );
}
