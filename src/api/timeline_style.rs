use crate::core::SpokeCategory;
use crate::render::Color;

/// Spoke tick length per [`SpokeCategory`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpokeHeights {
    pub micro: f64,
    pub minor: f64,
    pub major: f64,
    pub macro_tier: f64,
    pub mega: f64,
    pub special: f64,
}

impl Default for SpokeHeights {
    fn default() -> Self {
        Self {
            micro: 4.0,
            minor: 6.0,
            major: 9.0,
            macro_tier: 12.0,
            mega: 16.0,
            special: 24.0,
        }
    }
}

impl SpokeHeights {
    #[must_use]
    pub fn for_category(self, category: SpokeCategory) -> f64 {
        match category {
            SpokeCategory::Micro => self.micro,
            SpokeCategory::Minor => self.minor,
            SpokeCategory::Major => self.major,
            SpokeCategory::Macro => self.macro_tier,
            SpokeCategory::Mega => self.mega,
            SpokeCategory::Special => self.special,
        }
    }

    #[must_use]
    pub fn values(self) -> [f64; 6] {
        [
            self.micro,
            self.minor,
            self.major,
            self.macro_tier,
            self.mega,
            self.special,
        ]
    }
}

/// Style contract for timeline frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineStyle {
    pub background_color: Option<Color>,
    pub spine_color: Color,
    pub spine_stroke_width: f64,
    /// Vertical position of the spine as a share of viewport height.
    pub spine_y_ratio: f64,
    pub end_cap_size_px: f64,
    pub spoke_color: Color,
    pub special_spoke_color: Color,
    pub spoke_stroke_width: f64,
    pub spoke_heights_px: SpokeHeights,
    /// Spokes below this category are drawn without a label.
    pub label_min_category: SpokeCategory,
    pub label_color: Color,
    pub spoke_label_font_size_px: f64,
    pub crosshair_color: Color,
    pub crosshair_stroke_width: f64,
    pub crosshair_arm_px: f64,
    /// Alpha multiplier while the crosshair rests at the scope center.
    pub crosshair_idle_alpha: f64,
    pub show_readout: bool,
    pub readout_text_color: Color,
    pub readout_background_color: Color,
    pub readout_border_color: Color,
    /// Zero draws the readout box without a border.
    pub readout_border_width: f64,
    pub readout_font_size_px: f64,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            background_color: None,
            spine_color: Color::rgb(0.85, 0.85, 0.92),
            spine_stroke_width: 2.0,
            spine_y_ratio: 0.5,
            end_cap_size_px: 8.0,
            spoke_color: Color::rgb(0.62, 0.64, 0.74),
            special_spoke_color: Color::rgb(0.98, 0.78, 0.31),
            spoke_stroke_width: 1.0,
            spoke_heights_px: SpokeHeights::default(),
            label_min_category: SpokeCategory::Micro,
            label_color: Color::rgb(0.78, 0.80, 0.88),
            spoke_label_font_size_px: 11.0,
            crosshair_color: Color::rgb(0.36, 0.74, 0.98),
            crosshair_stroke_width: 1.0,
            crosshair_arm_px: 14.0,
            crosshair_idle_alpha: 0.5,
            show_readout: true,
            readout_text_color: Color::rgb(0.92, 0.93, 0.97),
            readout_background_color: Color::rgba(0.10, 0.11, 0.17, 0.85),
            readout_border_color: Color::rgba(0.36, 0.74, 0.98, 0.6),
            readout_border_width: 1.0,
            readout_font_size_px: 12.0,
        }
    }
}
