//! Draw a polygon, pick two of its vertices, and trace the boundary
//! between them clockwise or counterclockwise.

pub mod core;
pub mod data;
pub mod editing;
pub mod geometry;
pub mod rendering;
pub mod systems;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::core::state::{Command, ControlState, Role};
pub use crate::editing::Workspace;
pub use crate::geometry::{build_path, CanvasPoint};
pub use crate::ui::ControlPanel;
