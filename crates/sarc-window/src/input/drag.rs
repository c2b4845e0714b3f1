//! Drag geometry

use crate::math::{Rect, Size, Vec2};

/// New top-left after dragging a panel captured at `origin` by `delta`.
///
/// The result is clamped to `0 ≤ left ≤ viewport.width − origin.width`
/// (same for top/height). When the panel is larger than the viewport on an
/// axis the range is empty and the position pins to 0. Size is unchanged.
pub fn calculate_drag(origin: Rect, delta: Vec2, viewport: Size) -> Vec2 {
    let max = viewport.as_vec2() - origin.size().as_vec2();
    (origin.position() + delta).clamp_to_origin_box(max)
}
