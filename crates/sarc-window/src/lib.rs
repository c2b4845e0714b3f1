//! Floating panel geometry engine
//!
//! This crate provides the drag/resize core behind floating window panels
//! in a web page:
//! - Mixed-unit size specs (`em`, `%`, `px`) and their pixel resolution
//! - Panel geometry with centered/absolute coordinate frames
//! - Drag and resize gesture state machines with viewport clamping
//! - Open/close lifecycle with initial centering
//!
//! ## Architecture
//!
//! - [`math`]: Pixel geometry types (`Vec2`, `Size`, `Rect`)
//! - [`units`]: Length tokens and `"W, H"` size pairs
//! - [`env`]: Injectable viewport/font metrics
//! - [`input`]: Gesture sessions and drag/resize math
//! - [`panel`]: The panel shell tying it together
//!
//! ## Example
//!
//! ```rust
//! use sarc_window::{FixedEnvironment, Panel, PanelConfig, Vec2};
//!
//! let env = FixedEnvironment::new(1000.0, 800.0);
//! let mut panel = Panel::new(PanelConfig {
//!     size_default: Some("32em, 20em".to_string()),
//!     ..Default::default()
//! });
//!
//! panel.open(&env);
//! assert_eq!(panel.style().left, "244px");
//!
//! let rendered = panel.rendered_rect(&env);
//! panel.begin_drag(Vec2::new(300.0, 250.0), rendered);
//! panel.pointer_move(Vec2::new(350.0, 280.0), &env);
//! panel.pointer_up();
//! assert_eq!(panel.style().top, "270px");
//! ```
//!
//! With the `wasm` feature, `FloatingPanel` binds a panel to DOM elements
//! and manages the document-level gesture listeners.

pub mod math;
pub mod units;
pub mod env;
pub mod input;
pub mod panel;

mod bounds;
mod error;
mod geometry;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2};
pub use units::{Axis, LengthToken, LengthUnit, SizePair};
pub use env::{Environment, FixedEnvironment, DEFAULT_ROOT_FONT_SIZE};
pub use input::{GestureSession, InputResult, InputRouter};
pub use panel::{ClosePolicy, Panel, PanelConfig, PanelRegion};

pub use bounds::{Bounds, ConstraintStyle, ResolvedBounds};
pub use error::PanelError;
pub use geometry::{GeometryState, PanelStyle, Placement, CENTERING_TRANSFORM};
