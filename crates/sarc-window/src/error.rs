//! Error types for panel setup
//!
//! Geometry itself never fails: bad sizes degrade to defaults and bad
//! units resolve to 0. Errors only come from the edges, when a host hands
//! over configuration or when browser wiring fails.

/// Errors that can occur while configuring or mounting a panel.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// Configuration JSON could not be decoded.
    #[error("invalid panel configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// A browser global (`window`, `document`, ...) is missing.
    #[error("browser global unavailable: {0}")]
    Unavailable(&'static str),

    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}
