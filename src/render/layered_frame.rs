use serde::{Deserialize, Serialize};

use crate::core::Viewport;

use super::{LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive};

/// Draw layers of the timeline, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimelineLayer {
    Background,
    Spokes,
    Spine,
    Crosshair,
    Readout,
}

impl TimelineLayer {
    pub const CANONICAL_ORDER: [Self; 5] = [
        Self::Background,
        Self::Spokes,
        Self::Spine,
        Self::Crosshair,
        Self::Readout,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: TimelineLayer,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: TimelineLayer) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Frame grouped by [`TimelineLayer`], always holding every layer in
/// canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: TimelineLayer::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: TimelineLayer) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: TimelineLayer) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    pub fn push_line(&mut self, kind: TimelineLayer, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_rect(&mut self, kind: TimelineLayer, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    pub fn push_text(&mut self, kind: TimelineLayer, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        self.flatten_layers(&TimelineLayer::CANONICAL_ORDER)
    }

    /// Flattens only the listed layers, keeping canonical order.
    #[must_use]
    pub fn flatten_layers(&self, include_layers: &[TimelineLayer]) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            if !include_layers.contains(&layer.kind) {
                continue;
            }
            frame.lines.extend(layer.lines.iter().copied());
            frame.rects.extend(layer.rects.iter().copied());
            frame.texts.extend(layer.texts.iter().cloned());
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::{LayeredRenderFrame, TimelineLayer};
    use crate::core::Viewport;
    use crate::render::{Color, LinePrimitive};

    #[test]
    fn flatten_keeps_back_to_front_order() {
        let mut frame = LayeredRenderFrame::new(Viewport::new(100, 50));
        let red = Color::rgb(1.0, 0.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);
        frame.push_line(
            TimelineLayer::Crosshair,
            LinePrimitive::new(1.0, 0.0, 1.0, 50.0, 1.0, red),
        );
        frame.push_line(
            TimelineLayer::Spokes,
            LinePrimitive::new(2.0, 0.0, 2.0, 50.0, 1.0, blue),
        );

        let flat = frame.flatten();
        assert_eq!(flat.lines.len(), 2);
        assert_eq!(flat.lines[0].color, blue);
        assert_eq!(flat.lines[1].color, red);

        let only_crosshair = frame.flatten_layers(&[TimelineLayer::Crosshair]);
        assert_eq!(only_crosshair.lines.len(), 1);
    }
}
