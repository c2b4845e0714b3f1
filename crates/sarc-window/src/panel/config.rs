//! Panel configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bounds::Bounds;
use crate::error::PanelError;
use crate::units::SizePair;

/// Fallback for `sizeMin`
pub const DEFAULT_SIZE_MIN: &str = "10em, 5em";
/// Fallback for `sizeMax`
pub const DEFAULT_SIZE_MAX: &str = "100%, 100%";
/// Fallback for `sizeDefault`
pub const DEFAULT_SIZE: &str = "32em, 20em";

const DEFAULT_HEADER_HEIGHT: f32 = 32.0;
const DEFAULT_HANDLE_SIZE: f32 = 16.0;

/// What closing does to the panel's geometry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosePolicy {
    /// Keep the last position and size; reopening restores them
    #[default]
    Preserve,
    /// Forget placement and size; reopening re-centers at the default size
    Reset,
}

/// Construction-time options for a panel
///
/// Deserializes from the camelCase JSON a host passes in, every field
/// optional:
///
/// ```json
/// { "title": "Notes", "sizeMin": "10em, 5em", "sizeDefault": "40em 24em" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelConfig {
    /// Header text
    pub title: String,
    /// Minimum size as `"W, H"`
    pub size_min: Option<String>,
    /// Maximum size as `"W, H"`
    pub size_max: Option<String>,
    /// Initial size as `"W, H"`
    pub size_default: Option<String>,
    pub close_policy: ClosePolicy,
    /// Height of the draggable header strip, in pixels
    pub header_height: f32,
    /// Edge length of the square resize handle, in pixels
    pub handle_size: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Window".to_string(),
            size_min: None,
            size_max: None,
            size_default: None,
            close_policy: ClosePolicy::default(),
            header_height: DEFAULT_HEADER_HEIGHT,
            handle_size: DEFAULT_HANDLE_SIZE,
        }
    }
}

impl PanelConfig {
    /// Decode a JSON options object
    pub fn from_json(json: &str) -> Result<Self, PanelError> {
        let config: PanelConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Replace unusable hit-test metrics with defaults
    pub fn sanitized(mut self) -> Self {
        if !(self.header_height.is_finite() && self.header_height >= 0.0) {
            warn!(value = self.header_height, "invalid headerHeight, using default");
            self.header_height = DEFAULT_HEADER_HEIGHT;
        }
        if !(self.handle_size.is_finite() && self.handle_size >= 0.0) {
            warn!(value = self.handle_size, "invalid handleSize, using default");
            self.handle_size = DEFAULT_HANDLE_SIZE;
        }
        self
    }

    /// Parsed min/max bounds
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            SizePair::parse(self.size_min.as_deref(), DEFAULT_SIZE_MIN),
            SizePair::parse(self.size_max.as_deref(), DEFAULT_SIZE_MAX),
        )
    }

    /// Parsed initial size
    pub fn default_size(&self) -> SizePair {
        SizePair::parse(self.size_default.as_deref(), DEFAULT_SIZE)
    }
}
