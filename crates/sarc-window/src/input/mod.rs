//! Gesture handling
//!
//! Provides the drag/resize state machine and the pure geometry each
//! pointer move is run through.

mod router;
mod session;
mod drag;
mod resize;
mod result;

pub use router::InputRouter;
pub use session::GestureSession;
pub use drag::calculate_drag;
pub use resize::calculate_resize;
pub use result::InputResult;
