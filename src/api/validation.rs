use crate::core::{TimeScope, Viewport};
use crate::error::{TimelineError, TimelineResult};

use super::{EdgeBehavior, PanBehavior, TimelineStyle, ZoomBehavior};

pub(super) fn validate_viewport(viewport: Viewport) -> TimelineResult<Viewport> {
    if !viewport.is_valid() {
        return Err(TimelineError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

pub(super) fn validate_scope(scope: TimeScope) -> TimelineResult<TimeScope> {
    if !scope.is_finite() {
        return Err(TimelineError::InvalidData(
            "scope bounds must be finite".to_owned(),
        ));
    }
    if scope.start <= scope.end {
        return Err(TimelineError::InvalidData(
            "scope start must be older than scope end".to_owned(),
        ));
    }
    Ok(scope)
}

pub(super) fn validate_finite(value: f64, what: &str) -> TimelineResult<f64> {
    if !value.is_finite() {
        return Err(TimelineError::InvalidData(format!("{what} must be finite")));
    }
    Ok(value)
}

pub(super) fn validate_positive(value: f64, what: &str) -> TimelineResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TimelineError::InvalidData(format!(
            "{what} must be finite and > 0"
        )));
    }
    Ok(value)
}

pub(super) fn validate_zoom_behavior(behavior: ZoomBehavior) -> TimelineResult<ZoomBehavior> {
    if !behavior.wheel_zoom_factor.is_finite() || behavior.wheel_zoom_factor <= 1.0 {
        return Err(TimelineError::InvalidData(
            "wheel zoom factor must be finite and > 1".to_owned(),
        ));
    }
    if !behavior.button_zoom_factor.is_finite() || behavior.button_zoom_factor <= 1.0 {
        return Err(TimelineError::InvalidData(
            "button zoom factor must be finite and > 1".to_owned(),
        ));
    }
    let ratio = behavior.snap_to_default_ratio;
    if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
        return Err(TimelineError::InvalidData(
            "zoom snap ratio must be in (0, 1]".to_owned(),
        ));
    }
    Ok(behavior)
}

pub(super) fn validate_pan_behavior(behavior: PanBehavior) -> TimelineResult<PanBehavior> {
    let ratio = behavior.button_pan_ratio;
    if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
        return Err(TimelineError::InvalidData(
            "button pan ratio must be in (0, 1]".to_owned(),
        ));
    }
    Ok(behavior)
}

pub(super) fn validate_edge_behavior(behavior: EdgeBehavior) -> TimelineResult<EdgeBehavior> {
    let ratio = behavior.edge_padding_ratio;
    if !ratio.is_finite() || !(0.0..0.5).contains(&ratio) {
        return Err(TimelineError::InvalidData(
            "edge padding ratio must be finite and in [0, 0.5)".to_owned(),
        ));
    }
    Ok(behavior)
}

pub(super) fn validate_style(style: TimelineStyle) -> TimelineResult<TimelineStyle> {
    for color in [
        style.spine_color,
        style.spoke_color,
        style.special_spoke_color,
        style.label_color,
        style.crosshair_color,
        style.readout_text_color,
        style.readout_background_color,
        style.readout_border_color,
    ] {
        color.validate()?;
    }
    if let Some(background) = style.background_color {
        background.validate()?;
    }

    for (name, value) in [
        ("spine stroke width", style.spine_stroke_width),
        ("spoke stroke width", style.spoke_stroke_width),
        ("crosshair stroke width", style.crosshair_stroke_width),
        ("spoke label font size", style.spoke_label_font_size_px),
        ("readout font size", style.readout_font_size_px),
        ("end cap size", style.end_cap_size_px),
        ("crosshair arm length", style.crosshair_arm_px),
    ] {
        validate_positive(value, name)?;
    }

    if !style.readout_border_width.is_finite() || style.readout_border_width < 0.0 {
        return Err(TimelineError::InvalidData(
            "readout border width must be finite and >= 0".to_owned(),
        ));
    }

    for height in style.spoke_heights_px.values() {
        validate_positive(height, "spoke height")?;
    }

    for (name, value) in [
        ("spine y ratio", style.spine_y_ratio),
        ("crosshair idle alpha", style.crosshair_idle_alpha),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(TimelineError::InvalidData(format!(
                "{name} must be finite and in [0, 1]"
            )));
        }
    }
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_scope_is_rejected() {
        let err = validate_scope(TimeScope::new(0.0, 10.0)).expect_err("reversed");
        assert!(format!("{err}").contains("older"));
    }

    #[test]
    fn edge_ratio_must_leave_room_for_both_landmarks() {
        let behavior = EdgeBehavior {
            enabled: true,
            edge_padding_ratio: 0.5,
        };
        assert!(validate_edge_behavior(behavior).is_err());
    }

    #[test]
    fn spine_outside_viewport_is_rejected() {
        let style = TimelineStyle {
            spine_y_ratio: 1.5,
            ..TimelineStyle::default()
        };
        let err = validate_style(style).expect_err("spine ratio");
        assert!(format!("{err}").contains("spine y ratio"));
    }

    #[test]
    fn zoom_factors_must_exceed_one() {
        let behavior = ZoomBehavior {
            wheel_zoom_factor: 1.0,
            ..ZoomBehavior::default()
        };
        assert!(validate_zoom_behavior(behavior).is_err());
    }
}
