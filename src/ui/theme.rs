use bevy::prelude::Color;

// Window Configuration
pub const WINDOW_TITLE: &str = "Polypath";
pub const BACKGROUND_COLOR: Color = Color::srgb(0.08, 0.08, 0.08);
pub const CANVAS_COLOR: Color = Color::srgb(0.97, 0.97, 0.95);

// Font Sizes
pub const BUTTON_TEXT_FONT_SIZE: f32 = 18.0;
pub const HINT_TEXT_FONT_SIZE: f32 = 16.0;
pub const POINT_LABEL_FONT_SIZE: f32 = 14.0;

// Panel Visual Style Constants
pub const PANEL_BACKGROUND_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 1.0);
pub const PANEL_PADDING: f32 = 16.0;
pub const PANEL_ROW_GAP: f32 = 8.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_BORDER_WIDTH: f32 = 2.0;
pub const BUTTON_BORDER_RADIUS: f32 = 0.0;

// Button Colors
pub const NORMAL_BUTTON: Color = Color::srgb(0.1, 0.1, 0.1);
pub const HOVERED_BUTTON: Color = Color::srgb(0.25, 0.25, 0.25);
pub const PRESSED_BUTTON: Color = Color::srgb(1.0, 0.4, 0.0);
pub const DISABLED_BUTTON: Color = Color::srgb(0.06, 0.06, 0.06);

// Button Outline Colors
pub const NORMAL_BUTTON_OUTLINE_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
pub const HOVERED_BUTTON_OUTLINE_COLOR: Color = Color::srgb(0.75, 0.75, 0.75);
pub const PRESSED_BUTTON_OUTLINE_COLOR: Color = Color::srgb(1.0, 0.8, 0.3);
pub const DISABLED_BUTTON_OUTLINE_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);

// Text Colors
pub const BUTTON_TEXT_COLOR: Color = Color::srgb(0.85, 0.85, 0.85);
pub const DISABLED_TEXT_COLOR: Color = Color::srgb(0.35, 0.35, 0.35);
pub const HINT_TEXT_COLOR: Color = Color::srgb(0.75, 0.75, 0.75);
pub const HINT_VALID_COLOR: Color = Color::srgb(0.3, 1.0, 0.5);
pub const HINT_INVALID_COLOR: Color = Color::srgb(1.0, 0.35, 0.3);

// Gizmo Configuration
pub const GIZMO_LINE_WIDTH: f32 = 2.0;
pub const PATH_LINE_WIDTH: f32 = 3.0;

// Canvas Drawing
pub const POINT_RADIUS: f32 = 5.0;
pub const POINT_OUTLINE_COLOR: Color = Color::BLACK;
pub const POINT_FILL_COLOR: Color = Color::srgb(1.0, 0.957, 0.765);
pub const POLYGON_COLOR: Color = Color::BLACK;
pub const PATH_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);
pub const POINT_LABEL_COLOR: Color = Color::BLACK;
/// Where a point's label sits relative to the point, in canvas pixels
pub const POINT_LABEL_OFFSET: (f32, f32) = (-5.0, -20.0);
