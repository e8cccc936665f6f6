use serde::{Deserialize, Serialize};

use crate::core::{TimeScope, UNIVERSE_AGE_YEARS, ValueKind, format_time_value};

/// Which point the middle readout slot describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadoutFocus {
    Cursor,
    Center,
}

impl ReadoutFocus {
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::Cursor => "Cursor:",
            Self::Center => "Center:",
        }
    }
}

/// Status readout: left bound, cursor or center, right bound, total range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeReadout {
    pub range: String,
    pub left: String,
    pub focus: ReadoutFocus,
    pub focus_value: String,
    pub right: String,
}

impl ScopeReadout {
    /// Formats `scope` and the optional cursor year.
    ///
    /// Bounds at or beyond the universe limits and ranges at least as wide as
    /// the universe read `MAX`.
    #[must_use]
    pub fn resolve(scope: TimeScope, cursor_years_bp: Option<f64>) -> Self {
        let total_range = scope.width();
        let range = if total_range >= UNIVERSE_AGE_YEARS {
            "MAX".to_owned()
        } else {
            format_time_value(total_range, ValueKind::Range)
        };

        let (focus, focus_years) = match cursor_years_bp {
            Some(years) => (ReadoutFocus::Cursor, years),
            None => (ReadoutFocus::Center, scope.center()),
        };

        Self {
            range,
            left: format_time_value(scope.start, ValueKind::Edge),
            focus,
            focus_value: format_time_value(focus_years, ValueKind::Point),
            right: format_time_value(scope.end, ValueKind::Edge),
        }
    }

    /// `(caption, value)` pairs in display order, range first.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &str); 4] {
        [
            ("Range:", self.range.as_str()),
            ("Left:", self.left.as_str()),
            (self.focus.caption(), self.focus_value.as_str()),
            ("Right:", self.right.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{ReadoutFocus, ScopeReadout};
    use crate::core::{DEFAULT_VISUAL_SCOPE, TimeScope};

    #[test]
    fn default_scope_reads_max_everywhere_but_center() {
        let readout = ScopeReadout::resolve(DEFAULT_VISUAL_SCOPE, None);
        assert_eq!(readout.range, "MAX");
        assert_eq!(readout.left, "MAX");
        assert_eq!(readout.right, "MAX");
        assert_eq!(readout.focus, ReadoutFocus::Center);
        assert_eq!(readout.focus_value, "6.90 Bya");
    }

    #[test]
    fn zoomed_scope_formats_bounds_and_range() {
        let readout = ScopeReadout::resolve(TimeScope::new(600e6, 100e6), Some(250e6));
        assert_eq!(readout.range, "500.00 My");
        assert_eq!(readout.left, "600.00 Mya");
        assert_eq!(readout.right, "100.00 Mya");
        assert_eq!(readout.focus, ReadoutFocus::Cursor);
        assert_eq!(readout.focus_value, "250.00 Mya");
    }
}
