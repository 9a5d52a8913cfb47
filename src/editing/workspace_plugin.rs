//! Systems that connect the workspace to the event bus

use crate::core::state::Role;
use crate::data::RecordStore;
use crate::editing::workspace::{ClickMode, Workspace};
use crate::systems::commands::{
    BusSet, CanvasClick, ControlSignal, WorkspaceSignal,
};
use bevy::prelude::*;

/// Plugin owning the workspace state and its bus handlers
pub struct WorkspacePlugin;

impl Plugin for WorkspacePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Workspace>()
            .add_systems(Startup, restore_workspace)
            .add_systems(
                Update,
                (handle_control_signals, handle_canvas_clicks)
                    .chain()
                    .in_set(BusSet::Workspace),
            );
    }
}

/// Rebuilds the workspace from the saved canvas, if there is a usable one
pub fn restore_workspace(
    mut workspace: ResMut<Workspace>,
    store: Res<RecordStore>,
) {
    let Some(record) = store.load_canvas() else {
        debug!("No saved canvas, starting empty");
        return;
    };

    info!("Restoring saved canvas with {} points", record.points.len());
    workspace.restore(record);
    if workspace.rebuild_path().is_none() {
        debug!("Saved canvas has no endpoint pair yet");
    }
}

fn handle_control_signals(
    mut signals: EventReader<ControlSignal>,
    mut workspace: ResMut<Workspace>,
    mut store: ResMut<RecordStore>,
    mut feedback: EventWriter<WorkspaceSignal>,
) {
    for signal in signals.read() {
        debug!("Workspace received {}", signal.name());

        match *signal {
            ControlSignal::StartCreatePoints {} => {
                if !workspace.start_placing() {
                    debug!("Point placement already armed");
                }
            }
            ControlSignal::StartDrawPolygon {} => {
                if !workspace.draw_polygon() {
                    warn!(
                        "Cannot draw a polygon from {} points",
                        workspace.points().len()
                    );
                }
            }
            ControlSignal::ChoosePathPoint { role } => {
                workspace.arm_pick(role);
            }
            ControlSignal::ToggleDirection { clockwise } => {
                workspace.set_clockwise(clockwise);
                commit_path(&mut workspace, &mut store, &mut feedback);
            }
            ControlSignal::Clear {} => {
                workspace.clear();
                store.clear_canvas();
                info!("Workspace cleared");
            }
        }
    }
}

fn handle_canvas_clicks(
    mut clicks: EventReader<CanvasClick>,
    mut workspace: ResMut<Workspace>,
    mut store: ResMut<RecordStore>,
    mut feedback: EventWriter<WorkspaceSignal>,
) {
    for click in clicks.read() {
        match workspace.click_mode() {
            ClickMode::Inactive => {}
            ClickMode::PlacePoints => {
                if let Some(count) = workspace.place_point(click.position) {
                    debug!("Placed point {} at {:?}", count, click.position);
                    feedback.write(WorkspaceSignal::PointCountChanged {
                        points: count,
                    });
                }
            }
            ClickMode::PickEndpoint(role) => {
                let Some(index) = workspace.pick(click.position) else {
                    continue;
                };
                let label = match role {
                    Role::First => "first",
                    Role::Second => "second",
                };
                debug!("Picked point {} as the {} endpoint", index, label);

                let (first, second) = workspace.endpoints();
                feedback.write(WorkspaceSignal::EndpointsReport {
                    first_point_index: first,
                    second_point_index: second,
                });
                commit_path(&mut workspace, &mut store, &mut feedback);
            }
        }
    }
}

/// Rebuilds the path and, when that succeeds, saves and announces it
fn commit_path(
    workspace: &mut Workspace,
    store: &mut RecordStore,
    feedback: &mut EventWriter<WorkspaceSignal>,
) {
    let Some(path) = workspace.rebuild_path() else {
        return;
    };
    let path_points = path.to_vec();
    debug!("Path built: {:?}", path_points);

    store.save_canvas(&workspace.snapshot());
    feedback.write(WorkspaceSignal::PathBuilt { path_points });
}
