//! Input result type

use serde::Serialize;

use crate::geometry::PanelStyle;

/// Result of feeding a pointer event or lifecycle call to a panel
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Consumed, geometry unchanged
    Handled,
    /// Not for this panel (pass through)
    Unhandled,
    /// Consumed and the panel's bounding box changed
    Update {
        /// New inline style for the panel element
        style: PanelStyle,
    },
}

impl InputResult {
    /// Check if input was consumed
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Update { .. })
    }

    /// Style to apply, if geometry changed
    #[inline]
    pub fn style(&self) -> Option<&PanelStyle> {
        match self {
            InputResult::Update { style } => Some(style),
            _ => None,
        }
    }
}
