//! Bevy Systems and Plugins
//!
//! This module contains Bevy-specific systems and plugin configurations:
//! - The event bus between the control panel and the workspace
//! - Plugin grouping for windowed and headless runs

pub mod commands;
pub mod plugins;

// Re-export commonly used items
pub use commands::{
    BusSet, CanvasClick, CommandsPlugin, ControlInput, ControlSignal,
    WorkspaceSignal,
};
pub use plugins::{configure_default_plugins, PolypathCorePlugins, PolypathSystems};
