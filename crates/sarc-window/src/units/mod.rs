//! Length units and "width, height" size pairs
//!
//! Panel sizes are configured in CSS-like units (`32em`, `100%`, `480px`)
//! and normalized to pixels against the current [`Environment`] only when
//! a number is actually needed.
//!
//! [`Environment`]: crate::env::Environment

mod token;
mod pair;

pub use token::{Axis, LengthToken, LengthUnit};
pub use pair::{SizePair, HARD_DEFAULT_HEIGHT, HARD_DEFAULT_WIDTH};
