//! Panel regions for hit testing

use crate::math::{Rect, Vec2};

/// Region of a panel under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelRegion {
    /// Title strip (starts a drag)
    Header,
    /// Bottom-right corner square (starts a resize)
    ResizeHandle,
    /// Content area, owned by the host
    Body,
}

impl PanelRegion {
    /// Find the region of `rect` containing `pos`.
    ///
    /// The handle wins over the header where they overlap on very short
    /// panels.
    pub fn hit_test(rect: Rect, pos: Vec2, header_height: f32, handle_size: f32) -> Option<Self> {
        if !rect.contains(pos) {
            return None;
        }
        if pos.x >= rect.right() - handle_size && pos.y >= rect.bottom() - handle_size {
            return Some(PanelRegion::ResizeHandle);
        }
        if pos.y < rect.y + header_height {
            return Some(PanelRegion::Header);
        }
        Some(PanelRegion::Body)
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            PanelRegion::Header => "move",
            PanelRegion::ResizeHandle => "nwse-resize",
            PanelRegion::Body => "default",
        }
    }
}
