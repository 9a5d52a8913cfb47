// Settings ///////////////////////////////////////////////////////////////////
// This module contains all the settings for the app.

// Polygon ////////////////////////////////////////////////////////////////////

/// Fewest points a polygon may be drawn with
pub const MIN_POLYGON_POINTS: usize = 3;
/// Most points a polygon may be drawn with. Placement itself is not capped.
pub const MAX_POLYGON_POINTS: usize = 15;

// Endpoint Picking ///////////////////////////////////////////////////////////

/// A click strictly closer than this (in canvas pixels) to a point's center
/// selects that point
pub const HIT_RADIUS: f32 = 5.0;

// Persistence ////////////////////////////////////////////////////////////////

/// The single key the saved canvas lives under
pub const STORAGE_KEY: &str = "canvas";
/// Default directory for the file-backed store
pub const DEFAULT_STORAGE_DIR: &str = ".polypath";

// Canvas Layout //////////////////////////////////////////////////////////////

/// Width of the drawing canvas in logical pixels
pub const CANVAS_WIDTH: f32 = 500.0;
/// Height of the drawing canvas in logical pixels
pub const CANVAS_HEIGHT: f32 = 500.0;
/// Width of the control panel docked to the right of the canvas
pub const PANEL_WIDTH: f32 = 320.0;
