//! Resize geometry for the bottom-right handle

use crate::bounds::ResolvedBounds;
use crate::math::{Rect, Size, Vec2};

/// New size after dragging the bottom-right handle of `origin` by `delta`.
///
/// The top-left corner of `origin` is the anchor and never moves. The size
/// is clamped to `bounds` (max first, then min), then shrunk so the panel
/// ends at the viewport's right/bottom edge at most. The viewport clamp can
/// only shrink, and never below zero.
pub fn calculate_resize(origin: Rect, delta: Vec2, bounds: ResolvedBounds, viewport: Size) -> Size {
    let wanted = Size::new(origin.width + delta.x, origin.height + delta.y);
    let bounded = bounds.clamp(wanted);

    let room_x = (viewport.width - origin.x).max(0.0);
    let room_y = (viewport.height - origin.y).max(0.0);

    Size::new(bounded.width.min(room_x), bounded.height.min(room_y))
}
