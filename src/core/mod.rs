//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - The interaction state machine
//! - Settings, CLI handling and error helpers
//! - Pointer input

pub mod app;
pub mod cli;
pub mod errors;
pub mod io;
pub mod settings;
pub mod state;

// Re-export commonly used items
pub use app::create_app;
pub use cli::CliArgs;
pub use io::pointer::{PointerInfo, PointerPlugin};
pub use state::{Command, ControlState, Role};
