//! 2D size type for panel dimensions

use super::Vec2;

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to Vec2
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Clamp each dimension into `[min, max]`, applying `max` first.
    ///
    /// Unlike `f32::clamp` this never panics on `min > max`; the minimum
    /// wins, so a misconfigured panel can't collapse below its floor.
    #[inline]
    pub fn clamp_max_then_min(self, min: Size, max: Size) -> Self {
        Self::new(
            self.width.min(max.width).max(min.width),
            self.height.min(max.height).max(min.height),
        )
    }
}
