//! Geometric Primitives and Operations

pub mod path;
pub mod point;

// Re-export commonly used items
pub use path::{build_path, hit_test, is_drawable_count};
pub use point::CanvasPoint;
