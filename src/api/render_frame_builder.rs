use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    SpokeCategory, TimePoint, TimeScope, UNIVERSE_AGE_YEARS, Viewport, years_to_pixel,
    years_to_position_percent,
};
use crate::interaction::CrosshairMode;
use crate::render::{
    LayeredRenderFrame, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TimelineLayer,
};

use super::{ScopeReadout, TimelineStyle};

const SPOKE_LABEL_GAP_PX: f64 = 4.0;
const CROSSHAIR_GAP_PX: f64 = 4.0;
const READOUT_MARGIN_PX: f64 = 8.0;
const READOUT_PADDING_PX: f64 = 6.0;
const READOUT_LINE_SPACING: f64 = 1.4;
const READOUT_COLUMN_SPACING_PX: f64 = 170.0;

/// Direction marker drawn where the timeline continues off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpineCap {
    /// Universe origin lies beyond the left edge.
    Left,
    /// Present lies beyond the right edge.
    Right,
}

/// On-screen extent of the spine.
#[derive(Debug, Clone, PartialEq)]
pub struct SpineGeometry {
    /// Visible segment, `None` when the whole timeline is off-screen.
    pub segment: Option<(f64, f64)>,
    pub caps: SmallVec<[SpineCap; 2]>,
}

/// Clips the origin-to-present span to the viewport and records which
/// domain boundaries are off-screen.
#[must_use]
pub fn resolve_spine_geometry(scope: TimeScope, width_px: f64) -> SpineGeometry {
    let origin_x = years_to_pixel(UNIVERSE_AGE_YEARS, width_px, scope);
    let present_x = years_to_pixel(0.0, width_px, scope);

    let mut caps = SmallVec::new();
    if origin_x < 0.0 {
        caps.push(SpineCap::Left);
    }
    if present_x > width_px {
        caps.push(SpineCap::Right);
    }

    let left = origin_x.max(0.0);
    let right = present_x.min(width_px);
    let segment = (left < right).then_some((left, right));

    SpineGeometry { segment, caps }
}

/// Crosshair x in pixels, clamped to the viewport.
///
/// Rests at the scope center when no cursor is tracked.
#[must_use]
pub fn resolve_crosshair_x(scope: TimeScope, cursor_years_bp: Option<f64>, width_px: f64) -> f64 {
    let years = cursor_years_bp.unwrap_or_else(|| scope.center());
    let percent = years_to_position_percent(years, scope).clamp(0.0, 100.0);
    percent / 100.0 * width_px
}

pub(super) struct TimelineFrameInput<'a> {
    pub(super) viewport: Viewport,
    pub(super) scope: TimeScope,
    pub(super) points: &'a [TimePoint],
    pub(super) cursor_years_bp: Option<f64>,
    pub(super) crosshair_mode: CrosshairMode,
    pub(super) style: TimelineStyle,
}

pub(super) fn build_timeline_frame(input: TimelineFrameInput<'_>) -> LayeredRenderFrame {
    let mut frame = LayeredRenderFrame::new(input.viewport);
    let width = input.viewport.width_px();
    let height = input.viewport.height_px();
    let style = input.style;
    let spine_y = height * style.spine_y_ratio;

    if let Some(color) = style.background_color {
        frame.push_rect(
            TimelineLayer::Background,
            RectPrimitive::new(0.0, 0.0, width, height, color),
        );
    }

    push_spokes(&mut frame, &input, spine_y);
    push_spine(&mut frame, input.scope, width, spine_y, style);

    if input.crosshair_mode == CrosshairMode::FollowCursor {
        push_crosshair(&mut frame, &input, spine_y);
    }

    if style.show_readout {
        let readout = ScopeReadout::resolve(input.scope, input.cursor_years_bp);
        push_readout(&mut frame, &readout, style);
    }

    frame
}

fn push_spokes(frame: &mut LayeredRenderFrame, input: &TimelineFrameInput<'_>, spine_y: f64) {
    let width = input.viewport.width_px();
    let style = input.style;

    for point in input.points {
        let x = years_to_pixel(point.years_bp, width, input.scope);
        let length = style.spoke_heights_px.for_category(point.category);
        let color = if point.category == SpokeCategory::Special {
            style.special_spoke_color
        } else {
            style.spoke_color
        };

        frame.push_line(
            TimelineLayer::Spokes,
            LinePrimitive::new(x, spine_y, x, spine_y + length, style.spoke_stroke_width, color),
        );

        if point.category >= style.label_min_category {
            frame.push_text(
                TimelineLayer::Spokes,
                TextPrimitive::new(
                    point.label.clone(),
                    x,
                    spine_y + length + SPOKE_LABEL_GAP_PX,
                    style.spoke_label_font_size_px,
                    style.label_color,
                    TextHAlign::Center,
                ),
            );
        }
    }
}

fn push_spine(
    frame: &mut LayeredRenderFrame,
    scope: TimeScope,
    width: f64,
    spine_y: f64,
    style: TimelineStyle,
) {
    let geometry = resolve_spine_geometry(scope, width);
    let stroke = style.spine_stroke_width;
    let color = style.spine_color;

    if let Some((left, right)) = geometry.segment {
        frame.push_line(
            TimelineLayer::Spine,
            LinePrimitive::new(left, spine_y, right, spine_y, stroke, color),
        );
    }

    let size = style.end_cap_size_px;
    for cap in geometry.caps {
        // Chevron pointing toward the hidden boundary.
        let (tip_x, tail_x) = match cap {
            SpineCap::Left => (0.0, size),
            SpineCap::Right => (width, width - size),
        };
        for tail_y in [spine_y - size, spine_y + size] {
            frame.push_line(
                TimelineLayer::Spine,
                LinePrimitive::new(tail_x, tail_y, tip_x, spine_y, stroke, color),
            );
        }
    }
}

fn push_crosshair(frame: &mut LayeredRenderFrame, input: &TimelineFrameInput<'_>, spine_y: f64) {
    let style = input.style;
    let width = input.viewport.width_px();
    let x = resolve_crosshair_x(input.scope, input.cursor_years_bp, width);
    let color = if input.cursor_years_bp.is_some() {
        style.crosshair_color
    } else {
        style
            .crosshair_color
            .with_alpha(style.crosshair_color.alpha * style.crosshair_idle_alpha)
    };
    let stroke = style.crosshair_stroke_width;
    let arm = style.crosshair_arm_px;
    let gap = CROSSHAIR_GAP_PX;

    let segments = [
        (x, spine_y - gap - arm, x, spine_y - gap),
        (x, spine_y + gap, x, spine_y + gap + arm),
        (x - gap - arm, spine_y, x - gap, spine_y),
        (x + gap, spine_y, x + gap + arm, spine_y),
    ];
    for (x1, y1, x2, y2) in segments {
        frame.push_line(
            TimelineLayer::Crosshair,
            LinePrimitive::new(x1, y1, x2, y2, stroke, color),
        );
    }
}

fn push_readout(frame: &mut LayeredRenderFrame, readout: &ScopeReadout, style: TimelineStyle) {
    let line_height = style.readout_font_size_px * READOUT_LINE_SPACING;
    let rows = readout.rows();

    // Range on the first line, the three position values on the second.
    let box_width = READOUT_COLUMN_SPACING_PX * 3.0 + READOUT_PADDING_PX * 2.0;
    let box_height = line_height * 2.0 + READOUT_PADDING_PX * 2.0;
    frame.push_rect(
        TimelineLayer::Readout,
        RectPrimitive::new(
            READOUT_MARGIN_PX,
            READOUT_MARGIN_PX,
            box_width,
            box_height,
            style.readout_background_color,
        )
        .with_border(style.readout_border_width, style.readout_border_color)
        .with_corner_radius(4.0),
    );

    let left = READOUT_MARGIN_PX + READOUT_PADDING_PX;
    let top = READOUT_MARGIN_PX + READOUT_PADDING_PX;
    for (index, (caption, value)) in rows.iter().enumerate() {
        let (column, row) = if index == 0 { (0, 0.0) } else { (index - 1, 1.0) };
        frame.push_text(
            TimelineLayer::Readout,
            TextPrimitive::new(
                format!("{caption} {value}"),
                left + READOUT_COLUMN_SPACING_PX * column as f64,
                top + line_height * row,
                style.readout_font_size_px,
                style.readout_text_color,
                TextHAlign::Left,
            ),
        );
    }
}
