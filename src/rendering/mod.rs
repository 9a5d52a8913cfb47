//! Rendering and Visualization
//!
//! - Drawing the workspace through the `Surface` boundary
//! - The on-screen canvas: camera, background, gizmos and labels

pub mod canvas;
pub mod draw;

// Re-export commonly used items
pub use canvas::CanvasPlugin;
pub use draw::{render_workspace, RecordingSurface, Surface, SurfaceOp};
