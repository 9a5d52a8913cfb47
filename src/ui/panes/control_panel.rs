//! Control panel state and its bus handlers
//!
//! The panel owns the interaction state machine. It turns button presses
//! into `ControlSignal`s for the workspace and keeps its hints in step with
//! the `WorkspaceSignal`s that come back. It never looks at the points
//! themselves, only at the counts and indices the workspace reports.

use crate::core::state::{Command, ControlState, Role};
use crate::data::{RecordStore, SavedCanvas};
use crate::geometry::{is_drawable_count, CanvasPoint};
use crate::systems::commands::{
    BusSet, ControlInput, ControlSignal, WorkspaceSignal,
};
use bevy::prelude::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ControlPanel {
    state: ControlState,
    point_count: usize,
    clockwise: bool,
    first_point_index: Option<usize>,
    second_point_index: Option<usize>,
    path_points: Vec<usize>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            state: ControlState::Idle,
            point_count: 0,
            clockwise: true,
            first_point_index: None,
            second_point_index: None,
            path_points: Vec::new(),
        }
    }
}

impl ControlPanel {
    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn endpoints(&self) -> (Option<usize>, Option<usize>) {
        (self.first_point_index, self.second_point_index)
    }

    pub fn path_points(&self) -> &[usize] {
        &self.path_points
    }

    pub fn is_enabled(&self, command: Command) -> bool {
        self.state.is_enabled(command, self.point_count)
    }

    /// Applies a button press. Returns the signal to send to the
    /// workspace, or `None` if the command is refused in this state.
    pub fn issue(&mut self, command: Command) -> Option<ControlSignal> {
        self.state = self.state.apply(command, self.point_count)?;

        let signal = match command {
            Command::CreatePoints => ControlSignal::StartCreatePoints {},
            Command::DrawPolygon => ControlSignal::StartDrawPolygon {},
            Command::ChooseFirstPoint => {
                ControlSignal::ChoosePathPoint { role: Role::First }
            }
            Command::ChooseSecondPoint => {
                ControlSignal::ChoosePathPoint { role: Role::Second }
            }
            Command::ToggleDirection => {
                self.clockwise = !self.clockwise;
                ControlSignal::ToggleDirection {
                    clockwise: self.clockwise,
                }
            }
            Command::Clear => {
                *self = Self::default();
                ControlSignal::Clear {}
            }
        };
        Some(signal)
    }

    pub fn on_point_count(&mut self, count: usize) {
        self.point_count = count;
    }

    pub fn on_endpoints(&mut self, first: Option<usize>, second: Option<usize>) {
        self.first_point_index = first;
        self.second_point_index = second;
        self.state = ControlState::on_endpoints(first, second);
    }

    pub fn on_path_built(&mut self, path_points: Vec<usize>) {
        self.path_points = path_points;
    }

    /// Rebuilds the panel from the saved canvas, independently of the
    /// workspace doing the same
    pub fn restore(&mut self, record: &SavedCanvas) {
        self.point_count = record.points.len();
        self.clockwise = record.clockwise;
        self.on_endpoints(record.first_point_index, record.second_point_index);
        self.path_points = record.path_points.clone();
    }

    /// Whether the current point count may be drawn, independent of state
    pub fn point_count_valid(&self) -> bool {
        is_drawable_count(self.point_count)
    }

    pub fn point_count_hint(&self) -> String {
        format!("Created {} points", self.point_count)
    }

    pub fn first_point_hint(&self) -> String {
        self.first_point_index
            .map(CanvasPoint::label)
            .unwrap_or_default()
    }

    pub fn second_point_hint(&self) -> String {
        self.second_point_index
            .map(CanvasPoint::label)
            .unwrap_or_default()
    }

    pub fn path_label(&self) -> String {
        self.path_points
            .iter()
            .map(|&i| CanvasPoint::label(i))
            .collect::<Vec<_>>()
            .join(" - ")
    }

    pub fn direction_label(&self) -> &'static str {
        if self.clockwise {
            "Clockwise order"
        } else {
            "Counterclockwise order"
        }
    }
}

/// Plugin owning the control panel state and its bus handlers
pub struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlPanel>()
            .add_systems(Startup, restore_control_panel)
            .add_systems(Update, handle_control_input.in_set(BusSet::Controls))
            .add_systems(
                Update,
                handle_workspace_feedback.in_set(BusSet::Feedback),
            );
    }
}

pub fn restore_control_panel(
    mut panel: ResMut<ControlPanel>,
    store: Res<RecordStore>,
) {
    if let Some(record) = store.load_canvas() {
        panel.restore(&record);
        debug!("Control panel restored in state {:?}", panel.state());
    }
}

fn handle_control_input(
    mut inputs: EventReader<ControlInput>,
    mut panel: ResMut<ControlPanel>,
    mut signals: EventWriter<ControlSignal>,
) {
    for ControlInput(command) in inputs.read() {
        let before = panel.state();
        match panel.issue(*command) {
            Some(signal) => {
                info!(
                    "{:?}: {:?} -> {:?}, sending {}",
                    command,
                    before,
                    panel.state(),
                    signal.name()
                );
                signals.write(signal);
            }
            None => {
                debug!("Ignoring {:?} while {:?}", command, before);
            }
        }
    }
}

fn handle_workspace_feedback(
    mut feedback: EventReader<WorkspaceSignal>,
    mut panel: ResMut<ControlPanel>,
) {
    for signal in feedback.read() {
        match signal {
            WorkspaceSignal::PointCountChanged { points } => {
                panel.on_point_count(*points);
            }
            WorkspaceSignal::EndpointsReport {
                first_point_index,
                second_point_index,
            } => {
                panel.on_endpoints(*first_point_index, *second_point_index);
            }
            WorkspaceSignal::PathBuilt { path_points } => {
                panel.on_path_built(path_points.clone());
            }
        }
    }
}
