//! Panel shell
//!
//! Ties open/close visibility, initial centering and the two gesture
//! controllers to one panel's geometry.

mod config;
mod region;
mod shell;

pub use config::{ClosePolicy, PanelConfig, DEFAULT_SIZE, DEFAULT_SIZE_MAX, DEFAULT_SIZE_MIN};
pub use region::PanelRegion;
pub use shell::Panel;
