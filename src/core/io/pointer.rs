//! Mouse and trackpad managment

use crate::core::settings::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::systems::commands::{BusSet, CanvasClick};
use bevy::prelude::*;

/// Single source of truth for pointer (mouse/trackpad) position
#[derive(Resource, Default)]
pub struct PointerInfo {
    /// Canvas space coordinates, `None` while the pointer is off the canvas
    pub canvas: Option<Vec2>,
}

/// Plugin that centrally manages pointer position conversions
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerInfo>().add_systems(
            Update,
            (update_pointer_position, emit_canvas_clicks)
                .chain()
                .in_set(BusSet::Input),
        );
    }
}

/// The canvas occupies the top-left corner of the window, so canvas space
/// is screen space clipped to the canvas bounds
pub fn screen_to_canvas(screen: Vec2) -> Option<Vec2> {
    let inside = (0.0..CANVAS_WIDTH).contains(&screen.x)
        && (0.0..CANVAS_HEIGHT).contains(&screen.y);
    inside.then_some(screen)
}

/// Maps a canvas position to 2D world space for a window of `window_size`
/// viewed by a default `Camera2d` (origin at the window center, y up)
pub fn canvas_to_world(canvas: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        canvas.x - window_size.x / 2.0,
        window_size.y / 2.0 - canvas.y,
    )
}

/// System that updates pointer position once per frame
fn update_pointer_position(
    mut pointer_info: ResMut<PointerInfo>,
    windows: Query<&Window>,
) {
    if let Ok(window) = windows.single() {
        pointer_info.canvas =
            window.cursor_position().and_then(screen_to_canvas);
    }
}

fn emit_canvas_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    pointer_info: Res<PointerInfo>,
    mut clicks: EventWriter<CanvasClick>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if let Some(position) = pointer_info.canvas {
        clicks.write(CanvasClick { position });
    }
}
