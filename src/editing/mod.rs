pub mod workspace;
pub mod workspace_plugin;

// Re-export important types and plugins
pub use workspace::{ClickMode, Workspace};
pub use workspace_plugin::WorkspacePlugin;
