//! Gesture router state machine
//!
//! `Idle → Dragging | Resizing → Idle`. At most one session exists; a
//! pointer-down while a gesture runs is refused rather than replacing it.

use tracing::debug;

use crate::bounds::ResolvedBounds;
use crate::math::{Rect, Vec2};
use super::GestureSession;

/// Router owning the active gesture session
#[derive(Debug, Default)]
pub struct InputRouter {
    session: Option<GestureSession>,
}

impl InputRouter {
    /// Create an idle router
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Current gesture session
    #[inline]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Check if a gesture is active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a drag gesture. Returns false if another gesture is active.
    pub fn begin_drag(&mut self, origin: Rect, start_pointer: Vec2) -> bool {
        self.begin(GestureSession::Drag { origin, start_pointer })
    }

    /// Start a resize gesture. Returns false if another gesture is active.
    pub fn begin_resize(&mut self, origin: Rect, start_pointer: Vec2, bounds: ResolvedBounds) -> bool {
        self.begin(GestureSession::Resize {
            origin,
            start_pointer,
            bounds,
        })
    }

    fn begin(&mut self, session: GestureSession) -> bool {
        if self.session.is_some() {
            debug!("gesture already active, ignoring pointer-down");
            return false;
        }
        self.session = Some(session);
        true
    }

    /// End the current gesture, returning it
    pub fn end(&mut self) -> Option<GestureSession> {
        self.session.take()
    }
}
