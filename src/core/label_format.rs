//! Human-scale formatting of year values.
//!
//! Values of a year or more are scaled into billions/millions/thousands with
//! fixed decimals. Smaller magnitudes are reported as whole calendar units
//! (months, weeks, days, hours, minutes).

use serde::{Deserialize, Serialize};

use super::time_scale::UNIVERSE_AGE_YEARS;

pub const YEARS_PER_BILLION: f64 = 1e9;
pub const YEARS_PER_MILLION: f64 = 1e6;
pub const YEARS_PER_THOUSAND: f64 = 1e3;

pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const DAYS_PER_YEAR: f64 = 365.25;
pub const DAYS_PER_WEEK: f64 = 7.0;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

// Absorbs float error from the unit conversions (1/365.25 * 365.25 < 1).
const BUCKET_EPSILON: f64 = 1e-9;

/// How a readout value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueKind {
    /// A point in time ("ago" suffix).
    #[default]
    Point,
    /// A scope bound: collapses to `MAX` at or beyond the universe bounds.
    Edge,
    /// A duration: drops the "ago" suffix.
    Range,
}

/// Readout formatting with two decimals, e.g. `13.80 Bya`, `500.00 My`.
#[must_use]
pub fn format_time_value(years: f64, kind: ValueKind) -> String {
    if kind == ValueKind::Edge && (years >= UNIVERSE_AGE_YEARS || years <= 0.0) {
        return "MAX".to_owned();
    }

    let suffix = if kind == ValueKind::Range { "" } else { "a" };
    let magnitude = years.abs();

    if magnitude >= YEARS_PER_BILLION {
        format!("{:.2} By{suffix}", years / YEARS_PER_BILLION)
    } else if magnitude >= YEARS_PER_MILLION {
        format!("{:.2} My{suffix}", years / YEARS_PER_MILLION)
    } else if magnitude >= YEARS_PER_THOUSAND {
        format!("{:.2} Ky{suffix}", years / YEARS_PER_THOUSAND)
    } else if magnitude >= 1.0 {
        format!("{years:.2} years")
    } else {
        format_sub_year(years)
    }
}

/// Compact spoke label, e.g. `13.8 Bya`, `500 Mya`, `6 months`, `Present`.
#[must_use]
pub fn format_tick_label(years_bp: f64) -> String {
    if years_bp == 0.0 {
        return "Present".to_owned();
    }

    let magnitude = years_bp.abs();
    let sign = if years_bp < 0.0 { "-" } else { "" };
    if magnitude >= YEARS_PER_BILLION {
        format!("{sign}{} Bya", compact_number(magnitude / YEARS_PER_BILLION))
    } else if magnitude >= YEARS_PER_MILLION {
        format!("{sign}{} Mya", compact_number(magnitude / YEARS_PER_MILLION))
    } else if magnitude >= YEARS_PER_THOUSAND {
        format!("{sign}{} Kya", compact_number(magnitude / YEARS_PER_THOUSAND))
    } else if magnitude >= 1.0 {
        format!("{sign}{} ya", compact_number(magnitude))
    } else {
        format_sub_year(years_bp)
    }
}

/// Whole-unit rendering for magnitudes below one year.
///
/// Converts down through months, weeks, days, hours and minutes and reports
/// the first bucket that holds at least one rounded unit.
#[must_use]
pub fn format_sub_year(years: f64) -> String {
    if years == 0.0 {
        return "0 years".to_owned();
    }

    let sign = if years < 0.0 { "-" } else { "" };
    let magnitude = years.abs();

    let months = magnitude * MONTHS_PER_YEAR;
    if months >= 1.0 - BUCKET_EPSILON {
        return whole_units(sign, months, "month");
    }

    let days = magnitude * DAYS_PER_YEAR;
    let weeks = days / DAYS_PER_WEEK;
    if weeks >= 1.0 - BUCKET_EPSILON {
        return whole_units(sign, weeks, "week");
    }
    if days >= 1.0 - BUCKET_EPSILON {
        return whole_units(sign, days, "day");
    }

    let hours = days * HOURS_PER_DAY;
    if hours >= 1.0 - BUCKET_EPSILON {
        return whole_units(sign, hours, "hour");
    }

    whole_units(sign, hours * MINUTES_PER_HOUR, "minute")
}

fn whole_units(sign: &str, value: f64, unit: &str) -> String {
    let count = value.round();
    if count == 1.0 {
        format!("{sign}1 {unit}")
    } else {
        format!("{sign}{count:.0} {unit}s")
    }
}

fn compact_number(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
