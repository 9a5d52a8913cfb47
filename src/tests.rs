//! End-to-end scenarios: both components on a headless app, talking only
//! through the event bus

#[cfg(test)]
mod scenario_tests {
    use crate::core::state::{Command, ControlState};
    use crate::data::{FileStore, RecordStore, SavedCanvas};
    use crate::editing::{ClickMode, Workspace};
    use crate::systems::{
        BusSet, CanvasClick, ControlInput, ControlSignal, PolypathCorePlugins,
        WorkspaceSignal,
    };
    use crate::ui::ControlPanel;
    use bevy::prelude::*;

    const SQUARE: [(f32, f32); 4] =
        [(10.0, 10.0), (110.0, 10.0), (110.0, 110.0), (10.0, 110.0)];

    /// Every bus signal seen, in order
    #[derive(Resource, Default)]
    struct SignalLog {
        control: Vec<ControlSignal>,
        workspace: Vec<WorkspaceSignal>,
    }

    impl SignalLog {
        fn built_paths(&self) -> Vec<Vec<usize>> {
            self.workspace
                .iter()
                .filter_map(|s| match s {
                    WorkspaceSignal::PathBuilt { path_points } => {
                        Some(path_points.clone())
                    }
                    _ => None,
                })
                .collect()
        }
    }

    fn record_signals(
        mut control: EventReader<ControlSignal>,
        mut workspace: EventReader<WorkspaceSignal>,
        mut log: ResMut<SignalLog>,
    ) {
        log.control.extend(control.read().cloned());
        log.workspace.extend(workspace.read().cloned());
    }

    fn headless_app(store: RecordStore) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(store)
            .add_plugins(PolypathCorePlugins)
            .init_resource::<SignalLog>()
            .add_systems(Update, record_signals.after(BusSet::Feedback));
        app.update();
        app
    }

    fn press(app: &mut App, command: Command) {
        app.world_mut().send_event(ControlInput(command));
        app.update();
    }

    fn click(app: &mut App, x: f32, y: f32) {
        app.world_mut().send_event(CanvasClick {
            position: Vec2::new(x, y),
        });
        app.update();
    }

    fn panel(app: &App) -> &ControlPanel {
        app.world().resource::<ControlPanel>()
    }

    fn workspace(app: &App) -> &Workspace {
        app.world().resource::<Workspace>()
    }

    fn log(app: &App) -> &SignalLog {
        app.world().resource::<SignalLog>()
    }

    fn saved(app: &App) -> Option<SavedCanvas> {
        app.world().resource::<RecordStore>().load_canvas()
    }

    /// Places the square, draws it and picks 0 then 2
    fn square_with_path(app: &mut App) {
        press(app, Command::CreatePoints);
        for (x, y) in SQUARE {
            click(app, x, y);
        }
        press(app, Command::DrawPolygon);
        press(app, Command::ChooseFirstPoint);
        click(app, 10.0, 10.0);
        press(app, Command::ChooseSecondPoint);
        click(app, 110.0, 110.0);
    }

    #[test]
    fn test_square_path_and_direction_toggle() {
        let mut app = headless_app(RecordStore::in_memory());
        square_with_path(&mut app);

        assert_eq!(panel(&app).state(), ControlState::PathReady);
        assert_eq!(workspace(&app).path_points(), &[0, 1, 2]);
        assert_eq!(panel(&app).path_label(), "p1 - p2 - p3");

        press(&mut app, Command::ToggleDirection);
        assert_eq!(workspace(&app).path_points(), &[0, 3, 2]);
        assert_eq!(panel(&app).path_points(), &[0, 3, 2]);
        assert_eq!(panel(&app).state(), ControlState::PathReady);
        assert_eq!(log(&app).built_paths(), vec![vec![0, 1, 2], vec![0, 3, 2]]);

        let record = saved(&app).unwrap();
        assert!(!record.clockwise);
        assert_eq!(record.path_points, vec![0, 3, 2]);
    }

    #[test]
    fn test_point_counts_flow_back_to_the_panel() {
        let mut app = headless_app(RecordStore::in_memory());
        press(&mut app, Command::CreatePoints);
        click(&mut app, 10.0, 10.0);
        click(&mut app, 60.0, 10.0);

        assert_eq!(panel(&app).point_count(), 2);
        assert!(!panel(&app).point_count_valid());
        assert!(!panel(&app).is_enabled(Command::DrawPolygon));

        // A draw request that slips through is refused by the guard
        press(&mut app, Command::DrawPolygon);
        assert_eq!(panel(&app).state(), ControlState::CreatePoints);
        assert!(!workspace(&app).polygon_drawn());
        assert!(!log(&app)
            .control
            .contains(&ControlSignal::StartDrawPolygon {}));

        click(&mut app, 60.0, 60.0);
        assert!(panel(&app).is_enabled(Command::DrawPolygon));
        press(&mut app, Command::DrawPolygon);
        assert_eq!(panel(&app).state(), ControlState::PolygonDrawn);
        assert!(workspace(&app).polygon_drawn());

        // Placement is over once the polygon is drawn
        click(&mut app, 200.0, 200.0);
        assert_eq!(workspace(&app).points().len(), 3);
    }

    #[test]
    fn test_clicks_before_creating_points_are_ignored() {
        let mut app = headless_app(RecordStore::in_memory());
        click(&mut app, 10.0, 10.0);
        assert!(workspace(&app).points().is_empty());
        assert!(log(&app).workspace.is_empty());
    }

    #[test]
    fn test_more_than_fifteen_points_can_be_placed() {
        let mut app = headless_app(RecordStore::in_memory());
        press(&mut app, Command::CreatePoints);
        for i in 0..16 {
            click(&mut app, 20.0 * i as f32, 5.0);
        }
        assert_eq!(workspace(&app).points().len(), 16);
        assert_eq!(panel(&app).point_count_hint(), "Created 16 points");
        assert!(!panel(&app).is_enabled(Command::DrawPolygon));
    }

    #[test]
    fn test_missed_pick_keeps_waiting() {
        let mut app = headless_app(RecordStore::in_memory());
        press(&mut app, Command::CreatePoints);
        for (x, y) in SQUARE {
            click(&mut app, x, y);
        }
        press(&mut app, Command::DrawPolygon);
        press(&mut app, Command::ChooseSecondPoint);

        click(&mut app, 60.0, 60.0);
        assert_eq!(panel(&app).state(), ControlState::ChooseSecondPoint);
        assert_eq!(
            workspace(&app).click_mode(),
            ClickMode::PickEndpoint(crate::core::state::Role::Second)
        );

        click(&mut app, 112.0, 12.0);
        assert_eq!(panel(&app).state(), ControlState::PolygonDrawn);
        assert_eq!(panel(&app).endpoints(), (None, Some(1)));
        assert_eq!(panel(&app).second_point_hint(), "p2");
        assert!(log(&app).built_paths().is_empty());
        assert_eq!(saved(&app), None);
    }

    #[test]
    fn test_same_endpoint_twice_builds_nothing() {
        let mut app = headless_app(RecordStore::in_memory());
        press(&mut app, Command::CreatePoints);
        for (x, y) in SQUARE {
            click(&mut app, x, y);
        }
        press(&mut app, Command::DrawPolygon);
        press(&mut app, Command::ChooseFirstPoint);
        click(&mut app, 110.0, 10.0);
        press(&mut app, Command::ChooseSecondPoint);
        click(&mut app, 110.0, 10.0);

        // Both endpoints are set, so the panel moves on, but there is no path
        assert_eq!(panel(&app).state(), ControlState::PathReady);
        assert_eq!(panel(&app).endpoints(), (Some(1), Some(1)));
        assert!(workspace(&app).path_points().is_empty());
        assert!(log(&app).built_paths().is_empty());
        assert_eq!(saved(&app), None);

        // Toggling cannot build one either
        press(&mut app, Command::ToggleDirection);
        assert!(log(&app).built_paths().is_empty());
        assert!(!workspace(&app).clockwise());
    }

    #[test]
    fn test_disabled_commands_send_nothing() {
        let mut app = headless_app(RecordStore::in_memory());
        press(&mut app, Command::ToggleDirection);
        press(&mut app, Command::ChooseFirstPoint);
        press(&mut app, Command::DrawPolygon);
        assert!(log(&app).control.is_empty());
        assert_eq!(panel(&app).state(), ControlState::Idle);
    }

    #[test]
    fn test_clear_on_empty_canvas_is_harmless() {
        let mut app = headless_app(RecordStore::in_memory());
        press(&mut app, Command::Clear);
        press(&mut app, Command::Clear);

        assert_eq!(
            log(&app).control,
            vec![ControlSignal::Clear {}, ControlSignal::Clear {}]
        );
        assert_eq!(panel(&app).state(), ControlState::Idle);
        assert_eq!(*workspace(&app), Workspace::default());
        assert_eq!(saved(&app), None);

        press(&mut app, Command::CreatePoints);
        assert_eq!(panel(&app).state(), ControlState::CreatePoints);
    }

    #[test]
    fn test_clear_resets_both_components_and_storage() {
        let mut app = headless_app(RecordStore::in_memory());
        square_with_path(&mut app);
        press(&mut app, Command::ToggleDirection);
        assert!(saved(&app).is_some());

        press(&mut app, Command::Clear);
        assert_eq!(panel(&app).state(), ControlState::Idle);
        assert_eq!(panel(&app).point_count(), 0);
        assert!(panel(&app).clockwise());
        assert_eq!(panel(&app).endpoints(), (None, None));
        assert_eq!(*workspace(&app), Workspace::default());
        assert_eq!(saved(&app), None);

        // Start over from scratch
        square_with_path(&mut app);
        assert_eq!(workspace(&app).path_points(), &[0, 1, 2]);
    }

    #[test]
    fn test_restart_restores_both_components() {
        let dir = tempfile::tempdir().unwrap();

        let mut first_run =
            headless_app(RecordStore::new(FileStore::new(dir.path())));
        square_with_path(&mut first_run);
        press(&mut first_run, Command::ToggleDirection);
        let before = workspace(&first_run).clone();
        drop(first_run);

        let second_run =
            headless_app(RecordStore::new(FileStore::new(dir.path())));
        assert_eq!(workspace(&second_run).points(), before.points());
        assert_eq!(workspace(&second_run).path_points(), &[0, 3, 2]);
        assert_eq!(workspace(&second_run).endpoints(), (Some(0), Some(2)));
        assert!(!workspace(&second_run).clockwise());

        let restored = panel(&second_run);
        assert_eq!(restored.state(), ControlState::PathReady);
        assert_eq!(restored.point_count(), 4);
        assert!(!restored.clockwise());
        assert_eq!(restored.path_label(), "p1 - p4 - p3");
    }

    #[test]
    fn test_restored_canvas_keeps_working() {
        let mut first_run = headless_app(RecordStore::in_memory());
        square_with_path(&mut first_run);
        let store = first_run
            .world_mut()
            .remove_resource::<RecordStore>()
            .unwrap();

        let mut second_run = headless_app(store);
        press(&mut second_run, Command::ToggleDirection);
        assert_eq!(workspace(&second_run).path_points(), &[0, 3, 2]);
        assert_eq!(log(&second_run).built_paths(), vec![vec![0, 3, 2]]);
    }

    #[test]
    fn test_out_of_range_record_starts_empty() {
        let mut store = RecordStore::in_memory();
        store.put_raw(
            r#"{"points":[{"x":10,"y":10},{"x":110,"y":10},{"x":110,"y":110}],
                "pathPoints":[0,1],"firstPointIndex":9,"secondPointIndex":1,
                "clockwise":true}"#,
        );

        let app = headless_app(store);
        assert_eq!(*workspace(&app), Workspace::default());
        assert_eq!(panel(&app).state(), ControlState::Idle);
    }

    #[test]
    fn test_record_with_mismatched_path_starts_empty() {
        let mut store = RecordStore::in_memory();
        store.put_raw(
            r#"{"points":[{"x":10,"y":10},{"x":110,"y":10},{"x":110,"y":110},{"x":10,"y":110}],
                "pathPoints":[0,3,2],"firstPointIndex":0,"secondPointIndex":2,
                "clockwise":true}"#,
        );

        let app = headless_app(store);
        assert_eq!(*workspace(&app), Workspace::default());
        assert_eq!(panel(&app).state(), ControlState::Idle);
        assert!(panel(&app).path_points().is_empty());
    }

    #[test]
    fn test_record_with_same_endpoints_starts_empty() {
        let mut store = RecordStore::in_memory();
        store.put_raw(
            r#"{"points":[{"x":10,"y":10},{"x":110,"y":10},{"x":110,"y":110}],
                "pathPoints":[],"firstPointIndex":1,"secondPointIndex":1,
                "clockwise":true}"#,
        );

        let app = headless_app(store);
        assert_eq!(*workspace(&app), Workspace::default());
        assert_eq!(panel(&app).state(), ControlState::Idle);
        assert_eq!(panel(&app).endpoints(), (None, None));
    }

    #[test]
    fn test_unparsable_record_starts_empty() {
        let mut store = RecordStore::in_memory();
        store.put_raw("{{{{");

        let mut app = headless_app(store);
        assert_eq!(panel(&app).state(), ControlState::Idle);
        press(&mut app, Command::CreatePoints);
        assert_eq!(panel(&app).state(), ControlState::CreatePoints);
    }
}
