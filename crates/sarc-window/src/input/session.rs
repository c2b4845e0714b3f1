//! Gesture session state

use crate::bounds::ResolvedBounds;
use crate::math::{Rect, Vec2};

/// One active pointer gesture
///
/// Everything a move needs is captured at pointer-down, so a gesture is
/// unaffected by changes the host makes while it runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSession {
    /// Moving the panel by its header
    Drag {
        /// Panel rectangle at pointer-down
        origin: Rect,
        /// Pointer position at pointer-down (client coords)
        start_pointer: Vec2,
    },
    /// Resizing the panel from the bottom-right handle
    Resize {
        /// Panel rectangle at pointer-down; its top-left is the anchor
        origin: Rect,
        /// Pointer position at pointer-down (client coords)
        start_pointer: Vec2,
        /// Size bounds resolved at pointer-down
        bounds: ResolvedBounds,
    },
}

impl GestureSession {
    /// Check if this is a drag gesture
    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self, GestureSession::Drag { .. })
    }

    /// Check if this is a resize gesture
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, GestureSession::Resize { .. })
    }

    /// Panel rectangle captured when the gesture began
    pub fn origin(&self) -> Rect {
        match self {
            GestureSession::Drag { origin, .. } | GestureSession::Resize { origin, .. } => *origin,
        }
    }

    /// Pointer delta from gesture start
    pub fn delta(&self, pointer: Vec2) -> Vec2 {
        match self {
            GestureSession::Drag { start_pointer, .. }
            | GestureSession::Resize { start_pointer, .. } => pointer - *start_pointer,
        }
    }
}
