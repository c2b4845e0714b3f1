//! Environment provider for viewport and font metrics
//!
//! Geometry code never reads browser globals directly. Everything it needs
//! from the page (`innerWidth`, `innerHeight`, the root element's computed
//! font size) comes through [`Environment`], so the engine runs unchanged
//! against the browser or against fixed test values.

use crate::math::Size;

/// Root font size browsers use when nothing overrides it
pub const DEFAULT_ROOT_FONT_SIZE: f32 = 16.0;

/// Page metrics the geometry engine depends on
///
/// # Implementations
///
/// - **Browser**: `BrowserEnvironment` (behind the `wasm` feature) reads
///   `window.innerWidth/innerHeight` and `getComputedStyle(<html>).fontSize`
/// - **Tests / native hosts**: [`FixedEnvironment`]
pub trait Environment {
    /// Visible viewport size in pixels
    fn viewport(&self) -> Size;

    /// Root element font size in pixels (the base for `em`)
    fn root_font_size(&self) -> f32;
}

/// Environment with constant metrics
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedEnvironment {
    pub viewport: Size,
    pub root_font_size: f32,
}

impl Default for FixedEnvironment {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl FixedEnvironment {
    /// Viewport of the given size with the default 16px root font
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Size::new(width, height),
            root_font_size: DEFAULT_ROOT_FONT_SIZE,
        }
    }

    /// Override the root font size
    pub fn with_font_size(mut self, px: f32) -> Self {
        self.root_font_size = px;
        self
    }

    /// Simulate a browser window resize
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
    }
}

impl Environment for FixedEnvironment {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn root_font_size(&self) -> f32 {
        self.root_font_size
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn viewport(&self) -> Size {
        (**self).viewport()
    }

    fn root_font_size(&self) -> f32 {
        (**self).root_font_size()
    }
}
