//! 2D vector type for pointer positions and panel offsets

/// 2D vector for positions and pointer deltas
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise clamp into `[0, max]`.
    ///
    /// A negative `max` collapses the axis to 0 instead of producing an
    /// inverted range.
    #[inline]
    pub fn clamp_to_origin_box(self, max: Vec2) -> Self {
        Self::new(self.x.min(max.x).max(0.0), self.y.min(max.y).max(0.0))
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}
