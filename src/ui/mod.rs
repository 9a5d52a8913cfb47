//! User interface modules for the polygon path tool

pub mod hud;
pub mod panes;
pub mod theme;

// Re-export commonly used items
pub use hud::HudPlugin;
pub use panes::control_panel::{ControlPanel, ControlPanelPlugin};
