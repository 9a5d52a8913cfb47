//! Input plumbing from the window into the event bus

pub mod pointer;

pub use pointer::{canvas_to_world, screen_to_canvas, PointerInfo, PointerPlugin};
