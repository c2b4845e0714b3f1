//! Panel geometry: the single source of truth for size and placement

use serde::Serialize;

use crate::math::{Rect, Size, Vec2};

/// CSS transform that centers an element positioned at 50%/50%
pub const CENTERING_TRANSFORM: &str = "translate(-50%, -50%)";

/// How the panel's top-left corner is determined
///
/// A panel starts `Centered` (CSS `left: 50%; top: 50%` plus a centering
/// transform). The first gesture or open pins it to `Absolute` pixel
/// coordinates. The two frames never coexist, and nothing moves a panel
/// back to `Centered` except [`GeometryState::reset_placement`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Centered,
    Absolute(Vec2),
}

/// Live placement of a panel in viewport pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryState {
    pub size: Size,
    pub placement: Placement,
}

impl GeometryState {
    /// Centered geometry of the given size
    pub fn new(size: Size) -> Self {
        Self {
            size,
            placement: Placement::Centered,
        }
    }

    /// Whether absolute left/top exist
    #[inline]
    pub fn is_absolute(&self) -> bool {
        matches!(self.placement, Placement::Absolute(_))
    }

    /// Top-left corner in viewport pixels
    pub fn position(&self, viewport: Size) -> Vec2 {
        match self.placement {
            Placement::Absolute(pos) => pos,
            Placement::Centered => Rect::centered_in(viewport, self.size).position(),
        }
    }

    /// Bounding rectangle in viewport pixels
    pub fn rect(&self, viewport: Size) -> Rect {
        Rect::from_pos_size(self.position(viewport), self.size)
    }

    /// Switch to (or update) absolute coordinates
    #[inline]
    pub fn pin(&mut self, position: Vec2) {
        self.placement = Placement::Absolute(position);
    }

    /// Drop absolute coordinates and go back to centered placement
    #[inline]
    pub fn reset_placement(&mut self) {
        self.placement = Placement::Centered;
    }

    /// Inline style the host applies to the panel element
    pub fn style(&self, visible: bool) -> PanelStyle {
        let (left, top, transform) = match self.placement {
            Placement::Absolute(pos) => (px(pos.x), px(pos.y), String::new()),
            Placement::Centered => ("50%".to_string(), "50%".to_string(), CENTERING_TRANSFORM.to_string()),
        };
        PanelStyle {
            visible,
            width: px(self.size.width),
            height: px(self.size.height),
            left,
            top,
            transform,
        }
    }
}

/// Visual bounding box emitted after every geometry change
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelStyle {
    pub visible: bool,
    pub width: String,
    pub height: String,
    pub left: String,
    pub top: String,
    /// Empty once the panel has absolute coordinates
    pub transform: String,
}

impl PanelStyle {
    /// `(property, value)` pairs in CSS property naming
    pub fn properties(&self) -> [(&'static str, &str); 5] {
        [
            ("width", self.width.as_str()),
            ("height", self.height.as_str()),
            ("left", self.left.as_str()),
            ("top", self.top.as_str()),
            ("transform", self.transform.as_str()),
        ]
    }
}

/// Format a pixel length the way inline styles expect it
#[inline]
pub(crate) fn px(value: f32) -> String {
    format!("{}px", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_geometry_is_centered() {
        let geometry = GeometryState::new(Size::new(300.0, 200.0));
        assert!(!geometry.is_absolute());

        let pos = geometry.position(Size::new(800.0, 600.0));
        assert!((pos.x - 250.0).abs() < 0.001);
        assert!((pos.y - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_pin_switches_frame() {
        let mut geometry = GeometryState::new(Size::new(300.0, 200.0));
        geometry.pin(Vec2::new(10.0, 20.0));

        assert!(geometry.is_absolute());
        let rect = geometry.rect(Size::new(800.0, 600.0));
        assert_eq!(rect, Rect::new(10.0, 20.0, 300.0, 200.0));

        geometry.reset_placement();
        assert_eq!(geometry.placement, Placement::Centered);
    }

    #[test]
    fn test_centered_style_uses_transform() {
        let style = GeometryState::new(Size::new(512.0, 320.0)).style(true);
        assert_eq!(style.left, "50%");
        assert_eq!(style.top, "50%");
        assert_eq!(style.transform, CENTERING_TRANSFORM);
        assert_eq!(style.width, "512px");
    }

    #[test]
    fn test_absolute_style_clears_transform() {
        let mut geometry = GeometryState::new(Size::new(512.0, 320.0));
        geometry.pin(Vec2::new(244.0, 240.0));
        let style = geometry.style(false);

        assert!(!style.visible);
        assert_eq!(style.left, "244px");
        assert_eq!(style.top, "240px");
        assert!(style.transform.is_empty());
    }

    #[test]
    fn test_style_serializes_camel_case() {
        let style = GeometryState::new(Size::new(1.0, 2.0)).style(true);
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["visible"], true);
        assert_eq!(json["height"], "2px");
    }

    #[test]
    fn test_style_properties() {
        let style = GeometryState::new(Size::new(1.0, 2.0)).style(true);
        let props = style.properties();
        assert_eq!(props[0], ("width", "1px"));
        assert_eq!(props[4].0, "transform");
    }
}
