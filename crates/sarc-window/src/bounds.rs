//! Min/max size bounds of a panel

use serde::Serialize;

use crate::env::Environment;
use crate::math::Size;
use crate::units::SizePair;

/// Configured size bounds, kept in their original units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: SizePair,
    pub max: SizePair,
}

impl Bounds {
    /// Create bounds
    pub fn new(min: SizePair, max: SizePair) -> Self {
        Self { min, max }
    }

    /// Resolve to pixels against the current viewport and font size.
    ///
    /// `%` and `em` bases can change at any time, so callers resolve once
    /// per gesture and hold on to the result for the gesture's duration.
    pub fn resolve(&self, env: &impl Environment) -> ResolvedBounds {
        ResolvedBounds {
            min: self.min.to_px(env),
            max: self.max.to_px(env),
        }
    }

    /// Raw bound lengths as inline CSS `min-*`/`max-*` values
    pub fn constraint_style(&self) -> ConstraintStyle {
        ConstraintStyle {
            min_width: self.min.width.to_string(),
            min_height: self.min.height.to_string(),
            max_width: self.max.width.to_string(),
            max_height: self.max.height.to_string(),
        }
    }
}

/// Bounds in pixels for one gesture or one open transition
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolvedBounds {
    pub min: Size,
    pub max: Size,
}

impl ResolvedBounds {
    /// Clamp `size` into the bounds; max applies first so min wins on conflict
    #[inline]
    pub fn clamp(&self, size: Size) -> Size {
        size.clamp_max_then_min(self.min, self.max)
    }
}

/// Static size constraints for the panel element
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintStyle {
    pub min_width: String,
    pub min_height: String,
    pub max_width: String,
    pub max_height: String,
}

impl ConstraintStyle {
    /// `(property, value)` pairs in CSS property naming
    pub fn properties(&self) -> [(&'static str, &str); 4] {
        [
            ("min-width", self.min_width.as_str()),
            ("min-height", self.min_height.as_str()),
            ("max-width", self.max_width.as_str()),
            ("max-height", self.max_height.as_str()),
        ]
    }
}
