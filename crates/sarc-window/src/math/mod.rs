//! Pixel-space geometry types
//!
//! Every value here is an absolute CSS pixel in the viewport's client
//! coordinate frame (origin at the top-left of the visible page).

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
