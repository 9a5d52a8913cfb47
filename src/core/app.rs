//! Application initialization and configuration

use crate::core::cli::CliArgs;
use crate::data::{FileStore, RecordStore};
use crate::systems::{configure_default_plugins, PolypathSystems};
use crate::ui::theme::BACKGROUND_COLOR;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Bevy GUI application ready to run
pub fn create_app(cli_args: CliArgs) -> Result<App, String> {
    cli_args.validate().map_err(|e| format!("{e:#}"))?;

    let mut app = App::new();
    configure_app_settings(&mut app, cli_args);
    app.add_plugins(configure_default_plugins())
        .add_plugins(PolypathSystems)
        .add_systems(Update, exit_on_esc);
    Ok(app)
}

/// Picks the store named on the command line, erasing its canvas first
/// when asked to
pub fn open_record_store(cli_args: &CliArgs) -> RecordStore {
    let mut store = if cli_args.ephemeral {
        info!("Using in-memory storage, nothing will be saved");
        RecordStore::in_memory()
    } else {
        info!("Using storage in {}", cli_args.storage_dir.display());
        RecordStore::new(FileStore::new(&cli_args.storage_dir))
    };

    if cli_args.reset {
        info!("Erasing saved canvas");
        store.clear_canvas();
    }
    store
}

/// Sets up application resources and configuration
fn configure_app_settings(app: &mut App, cli_args: CliArgs) {
    let store = open_record_store(&cli_args);

    app.insert_resource(store)
        .insert_resource(cli_args)
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(WinitSettings::desktop_app());
}

/// System to exit the application when the Escape key is pressed
fn exit_on_esc(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut app_exit_events: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        app_exit_events.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SavedCanvas;
    use crate::geometry::CanvasPoint;

    fn record() -> SavedCanvas {
        SavedCanvas {
            points: vec![
                CanvasPoint::new(0.0, 0.0),
                CanvasPoint::new(40.0, 0.0),
                CanvasPoint::new(20.0, 30.0),
            ],
            path_points: vec![0, 1],
            first_point_index: Some(0),
            second_point_index: Some(1),
            clockwise: true,
        }
    }

    #[test]
    fn test_reset_erases_saved_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = CliArgs {
            storage_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        open_record_store(&args).save_canvas(&record());
        assert_eq!(open_record_store(&args).load_canvas(), Some(record()));

        args.reset = true;
        assert_eq!(open_record_store(&args).load_canvas(), None);
    }

    #[test]
    fn test_ephemeral_store_ignores_directory() {
        let dir = tempfile::tempdir().unwrap();
        let args = CliArgs {
            storage_dir: dir.path().to_path_buf(),
            ephemeral: true,
            ..Default::default()
        };
        open_record_store(&args).save_canvas(&record());
        assert!(!dir.path().join("canvas.json").exists());
    }
}
