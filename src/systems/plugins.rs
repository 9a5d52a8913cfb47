use bevy::prelude::*;

use crate::core::io::PointerPlugin;
use crate::core::settings::{CANVAS_HEIGHT, CANVAS_WIDTH, PANEL_WIDTH};
use crate::editing::WorkspacePlugin;
use crate::rendering::CanvasPlugin;
use crate::systems::commands::CommandsPlugin;
use crate::ui::theme::WINDOW_TITLE;
use crate::ui::{ControlPanelPlugin, HudPlugin};

/// Configure the default Bevy plugins with custom settings
pub fn configure_default_plugins() -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (CANVAS_WIDTH + PANEL_WIDTH, CANVAS_HEIGHT).into(),
                resizable: false,
                // Tell wasm to resize the window according to the available canvas
                fit_canvas_to_parent: true,
                // Tells wasm not to override default event handling, like F5, Ctrl+R etc.
                prevent_default_event_handling: false,
                ..default()
            }),
            ..default()
        })
        // Disable Bevy's default LogPlugin since we're using our own custom logger
        .build()
        .disable::<bevy::log::LogPlugin>()
}

/// The bus plus both components. Needs no window, so it also runs under
/// `MinimalPlugins`.
pub struct PolypathCorePlugins;

impl Plugin for PolypathCorePlugins {
    fn build(&self, app: &mut App) {
        app.add_plugins((CommandsPlugin, WorkspacePlugin, ControlPanelPlugin));
    }
}

/// Everything the windowed application runs
pub struct PolypathSystems;

impl Plugin for PolypathSystems {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            PolypathCorePlugins,
            PointerPlugin,
            CanvasPlugin,
            HudPlugin,
        ));
    }
}
