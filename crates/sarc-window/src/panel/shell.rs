//! Panel lifecycle and gesture wiring

use tracing::{debug, trace};

use crate::bounds::{Bounds, ConstraintStyle};
use crate::env::Environment;
use crate::geometry::{GeometryState, PanelStyle};
use crate::input::{calculate_drag, calculate_resize, GestureSession, InputResult, InputRouter};
use crate::math::{Rect, Vec2};
use crate::units::SizePair;
use super::{ClosePolicy, PanelConfig, PanelRegion};

/// A floating panel: visibility, geometry and the active gesture
///
/// Every mutation goes through this type, and each one that changes the
/// bounding box returns [`InputResult::Update`] with the style to apply.
/// Gestures only start while the panel is open, and a rendered rectangle
/// must be supplied to start one; without it (element not mounted) the
/// call is a no-op.
pub struct Panel {
    config: PanelConfig,
    bounds: Bounds,
    default_size: SizePair,
    /// Size the panel asks for; resizes overwrite it with pixel lengths
    declared: SizePair,
    geometry: GeometryState,
    open: bool,
    input: InputRouter,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

impl Panel {
    /// Create a closed panel
    pub fn new(config: PanelConfig) -> Self {
        let config = config.sanitized();
        let bounds = config.bounds();
        let default_size = config.default_size();
        Self {
            config,
            bounds,
            default_size,
            declared: default_size,
            geometry: GeometryState::new(Default::default()),
            open: false,
            input: InputRouter::new(),
        }
    }

    /// Panel configuration
    #[inline]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Header title
    #[inline]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Check if the panel is visible
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current geometry
    #[inline]
    pub fn geometry(&self) -> &GeometryState {
        &self.geometry
    }

    /// Size the panel currently asks for
    #[inline]
    pub fn declared_size(&self) -> SizePair {
        self.declared
    }

    /// Configured bounds
    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Active gesture, if any
    #[inline]
    pub fn gesture(&self) -> Option<&GestureSession> {
        self.input.session()
    }

    /// Current inline style
    pub fn style(&self) -> PanelStyle {
        self.geometry.style(self.open)
    }

    /// Static min/max constraints for the panel element
    pub fn constraint_style(&self) -> ConstraintStyle {
        self.bounds.constraint_style()
    }

    /// Bounding box as laid out, or `None` while closed
    pub fn rendered_rect(&self, env: &impl Environment) -> Option<Rect> {
        self.open.then(|| self.geometry.rect(env.viewport()))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Show the panel.
    ///
    /// The declared size is resolved and reconciled against the bounds.
    /// Without absolute coordinates the panel is centered in the viewport
    /// and pinned there; with them, the position is kept as is. Opening an
    /// open panel does nothing.
    pub fn open(&mut self, env: &impl Environment) -> InputResult {
        if self.open {
            return InputResult::Handled;
        }
        self.open = true;

        let viewport = env.viewport();
        let size = self.bounds.resolve(env).clamp(self.declared.to_px(env));
        self.geometry.size = size;

        if !self.geometry.is_absolute() {
            let centered = Rect::centered_in(viewport, size);
            self.geometry.pin(centered.position());
            debug!(title = %self.config.title, left = centered.x, top = centered.y, "panel opened centered");
        } else {
            debug!(title = %self.config.title, "panel reopened at previous position");
        }

        self.update()
    }

    /// Hide the panel, ending any gesture.
    ///
    /// Under [`ClosePolicy::Reset`] placement returns to centered and the
    /// declared size to the configured default.
    pub fn close(&mut self) -> InputResult {
        if !self.open {
            return InputResult::Handled;
        }
        if self.input.end().is_some() {
            debug!("gesture ended by close");
        }
        self.open = false;

        if self.config.close_policy == ClosePolicy::Reset {
            self.geometry.reset_placement();
            self.declared = self.default_size;
        }

        debug!(title = %self.config.title, policy = ?self.config.close_policy, "panel closed");
        self.update()
    }

    /// Open or close
    pub fn set_open(&mut self, open: bool, env: &impl Environment) -> InputResult {
        if open {
            self.open(env)
        } else {
            self.close()
        }
    }

    /// Flip visibility
    pub fn toggle(&mut self, env: &impl Environment) -> InputResult {
        self.set_open(!self.open, env)
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Pointer-down on the header.
    ///
    /// Captures `rendered` as the drag origin and replaces any centering
    /// with the equivalent absolute left/top.
    pub fn begin_drag(&mut self, pointer: Vec2, rendered: Option<Rect>) -> InputResult {
        let Some(origin) = self.gesture_origin(rendered) else {
            return InputResult::Unhandled;
        };
        if !self.input.begin_drag(origin, pointer) {
            return InputResult::Handled;
        }

        self.geometry.pin(origin.position());
        debug!(left = origin.x, top = origin.y, "drag started");
        self.update()
    }

    /// Pointer-down on the resize handle.
    ///
    /// Captures `rendered` as the anchor rectangle and resolves the size
    /// bounds once for the whole gesture.
    pub fn begin_resize(&mut self, pointer: Vec2, rendered: Option<Rect>, env: &impl Environment) -> InputResult {
        let Some(origin) = self.gesture_origin(rendered) else {
            return InputResult::Unhandled;
        };
        let bounds = self.bounds.resolve(env);
        if !self.input.begin_resize(origin, pointer, bounds) {
            return InputResult::Handled;
        }

        self.geometry.pin(origin.position());
        debug!(
            width = origin.width,
            height = origin.height,
            min_width = bounds.min.width,
            max_width = bounds.max.width,
            "resize started"
        );
        self.update()
    }

    /// Pointer-down at raw client coordinates, routed by hit testing the
    /// panel's own geometry. Body hits are left to the host.
    pub fn pointer_down(&mut self, pointer: Vec2, env: &impl Environment) -> InputResult {
        let rendered = self.rendered_rect(env);
        match self.region_at(pointer, env) {
            Some(PanelRegion::Header) => self.begin_drag(pointer, rendered),
            Some(PanelRegion::ResizeHandle) => self.begin_resize(pointer, rendered, env),
            Some(PanelRegion::Body) | None => InputResult::Unhandled,
        }
    }

    /// Region under `pointer`, if the panel is open and contains it
    pub fn region_at(&self, pointer: Vec2, env: &impl Environment) -> Option<PanelRegion> {
        let rect = self.rendered_rect(env)?;
        PanelRegion::hit_test(rect, pointer, self.config.header_height, self.config.handle_size)
    }

    /// Pointer-move anywhere in the document
    pub fn pointer_move(&mut self, pointer: Vec2, env: &impl Environment) -> InputResult {
        let Some(session) = self.input.session().copied() else {
            return InputResult::Unhandled;
        };
        let delta = session.delta(pointer);
        let viewport = env.viewport();

        match session {
            GestureSession::Drag { origin, .. } => {
                let position = calculate_drag(origin, delta, viewport);
                self.geometry.pin(position);
                trace!(left = position.x, top = position.y, "drag move");
            }
            GestureSession::Resize { origin, bounds, .. } => {
                let size = calculate_resize(origin, delta, bounds, viewport);
                self.geometry.pin(origin.position());
                self.geometry.size = size;
                self.declared = SizePair::from_px(size);
                trace!(width = size.width, height = size.height, "resize move");
            }
        }
        self.update()
    }

    /// Pointer-up anywhere in the document ends the gesture
    pub fn pointer_up(&mut self) -> InputResult {
        match self.input.end() {
            Some(session) => {
                debug!(resize = session.is_resize(), "gesture ended");
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// The host lost the pointer (pointercancel, blur). Ends the gesture
    /// where the last move left it.
    pub fn pointer_cancel(&mut self) -> InputResult {
        match self.input.end() {
            Some(_) => {
                debug!("gesture cancelled");
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    fn gesture_origin(&self, rendered: Option<Rect>) -> Option<Rect> {
        if !self.open {
            return None;
        }
        if rendered.is_none() {
            debug!("panel not mounted, ignoring pointer-down");
        }
        rendered
    }

    fn update(&self) -> InputResult {
        InputResult::Update { style: self.style() }
    }
}
