//! Landmark ("spoke") generation.
//!
//! The ladder is fixed: universe origin, billion marks, `d * 10^k` marks
//! down to single years, a handful of sub-year marks, and the present.
//! Points are never filtered by position; the renderer places off-screen
//! points too. A scope only culls tiers that would be too dense to read.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use super::TimeScope;
use super::label_format::{
    DAYS_PER_WEEK, DAYS_PER_YEAR, HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR,
    format_tick_label,
};
use super::time_scale::UNIVERSE_AGE_YEARS;

/// Tiers whose spacing falls below `scope.width() / MAX_TICKS_PER_TIER_SPAN`
/// are dropped when a scope is supplied.
pub const MAX_TICKS_PER_TIER_SPAN: f64 = 100.0;

/// Visual prominence of a spoke, ordered from least to most prominent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SpokeCategory {
    Micro,
    Minor,
    Major,
    Macro,
    Mega,
    /// Universe origin and present.
    Special,
}

impl SpokeCategory {
    /// Category for a `d * 10^k` mark with the given decade step.
    #[must_use]
    pub fn for_decade_step(step_years: f64) -> Self {
        if step_years >= 1e9 {
            Self::Mega
        } else if step_years >= 1e8 {
            Self::Macro
        } else if step_years >= 1e6 {
            Self::Major
        } else if step_years >= 1e3 {
            Self::Minor
        } else {
            Self::Micro
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub years_bp: f64,
    pub label: String,
    pub category: SpokeCategory,
}

impl TimePoint {
    #[must_use]
    pub fn new(years_bp: f64, category: SpokeCategory) -> Self {
        Self {
            years_bp,
            label: format_tick_label(years_bp),
            category,
        }
    }
}

struct Tier {
    step_years: f64,
    values: Vec<f64>,
    category: SpokeCategory,
}

fn ladder_tiers() -> Vec<Tier> {
    let mut tiers = Vec::with_capacity(12);

    tiers.push(Tier {
        step_years: 1e9,
        values: (1..=13).rev().map(|i| f64::from(i) * 1e9).collect(),
        category: SpokeCategory::Mega,
    });

    for exponent in (0..=8).rev() {
        let step_years = 10f64.powi(exponent);
        tiers.push(Tier {
            step_years,
            values: (1..=9).rev().map(|d| f64::from(d) * step_years).collect(),
            category: SpokeCategory::for_decade_step(step_years),
        });
    }

    let year_fraction = |units_per_year: f64| 1.0 / units_per_year;
    let minutes_per_year = DAYS_PER_YEAR * HOURS_PER_DAY * MINUTES_PER_HOUR;
    let sub_year = [
        6.0 / MONTHS_PER_YEAR,
        year_fraction(MONTHS_PER_YEAR),
        DAYS_PER_WEEK / DAYS_PER_YEAR,
        year_fraction(DAYS_PER_YEAR),
        year_fraction(DAYS_PER_YEAR * HOURS_PER_DAY),
        year_fraction(minutes_per_year),
    ];
    for value in sub_year {
        tiers.push(Tier {
            step_years: value,
            values: vec![value],
            category: SpokeCategory::Micro,
        });
    }

    tiers
}

/// Generates landmark points, ordered from the universe origin to the present.
///
/// `None` yields the full ladder. `Some(scope)` keeps only tiers whose
/// spacing is readable at that zoom level. The origin and the present are
/// always included exactly once, tagged [`SpokeCategory::Special`].
#[must_use]
pub fn generate_tick_points(scope: Option<TimeScope>) -> Vec<TimePoint> {
    let min_step = scope
        .map(|scope| scope.width().abs() / MAX_TICKS_PER_TIER_SPAN)
        .filter(|step| step.is_finite())
        .unwrap_or(0.0);

    // Keyed by value: each mark appears once, at its most prominent category.
    let mut points: BTreeMap<OrderedFloat<f64>, SpokeCategory> = BTreeMap::new();
    points.insert(OrderedFloat(UNIVERSE_AGE_YEARS), SpokeCategory::Special);
    points.insert(OrderedFloat(0.0), SpokeCategory::Special);

    for tier in ladder_tiers() {
        if tier.step_years < min_step {
            continue;
        }
        for value in tier.values {
            points
                .entry(OrderedFloat(value))
                .and_modify(|category| *category = (*category).max(tier.category))
                .or_insert(tier.category);
        }
    }

    points
        .into_iter()
        .rev()
        .map(|(value, category)| TimePoint::new(value.into_inner(), category))
        .collect()
}
