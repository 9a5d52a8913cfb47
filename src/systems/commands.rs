//! commands.rs - Event bus between the control panel and the workspace
//!
//! The two components never hold references to each other. Everything they
//! need to tell one another goes through the events defined here:
//! 1. `ControlInput` carries a button press into the control panel
//! 2. `ControlSignal` carries the control panel's intents to the workspace
//! 3. `CanvasClick` carries a click on the drawing canvas to the workspace
//! 4. `WorkspaceSignal` carries geometry facts back to the control panel
//!
//! Within a frame the handlers run in `BusSet` order, so a button press is
//! fully answered (signal, workspace reaction, feedback) before the next
//! frame starts.

use crate::core::state::{Command, Role};
use bevy::prelude::*;
use serde::Serialize;

/// A button press on the control panel, before any enablement check
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlInput(pub Command);

/// A left click on the canvas, in canvas space
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CanvasClick {
    pub position: Vec2,
}

/// Control → Workspace intents.
///
/// Serializes to the bare payload of each signal: `{}` for the unit
/// signals, `{"role":"first"}` for a pick, `{"clockwise":false}` for a
/// toggle.
#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ControlSignal {
    StartCreatePoints {},
    StartDrawPolygon {},
    ChoosePathPoint { role: Role },
    ToggleDirection { clockwise: bool },
    Clear {},
}

impl ControlSignal {
    pub fn name(&self) -> &'static str {
        match self {
            ControlSignal::StartCreatePoints {} => "start-create-points",
            ControlSignal::StartDrawPolygon {} => "start-draw-polygon",
            ControlSignal::ChoosePathPoint { role: Role::First } => {
                "choose-first-point"
            }
            ControlSignal::ChoosePathPoint { role: Role::Second } => {
                "choose-second-point"
            }
            ControlSignal::ToggleDirection { .. } => "toggle-direction",
            ControlSignal::Clear {} => "clear",
        }
    }
}

/// Workspace → Control facts
#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WorkspaceSignal {
    PointCountChanged {
        points: usize,
    },
    EndpointsReport {
        #[serde(rename = "firstPointIndex")]
        first_point_index: Option<usize>,
        #[serde(rename = "secondPointIndex")]
        second_point_index: Option<usize>,
    },
    PathBuilt {
        #[serde(rename = "pathPoints")]
        path_points: Vec<usize>,
    },
}

impl WorkspaceSignal {
    pub fn name(&self) -> &'static str {
        match self {
            WorkspaceSignal::PointCountChanged { .. } => "point-count-changed",
            WorkspaceSignal::EndpointsReport { .. } => "endpoints-report",
            WorkspaceSignal::PathBuilt { .. } => "path-built",
        }
    }
}

/// Ordering of the bus handlers inside `Update`
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum BusSet {
    /// Pointer and button input become `CanvasClick` and `ControlInput`
    Input,
    /// The control panel turns `ControlInput` into `ControlSignal`
    Controls,
    /// The workspace reacts to signals and clicks
    Workspace,
    /// The control panel absorbs `WorkspaceSignal`
    Feedback,
}

/// Registers every bus event and fixes the order its handlers run in
pub struct CommandsPlugin;

impl Plugin for CommandsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ControlInput>()
            .add_event::<CanvasClick>()
            .add_event::<ControlSignal>()
            .add_event::<WorkspaceSignal>()
            .configure_sets(
                Update,
                (
                    BusSet::Input,
                    BusSet::Controls,
                    BusSet::Workspace,
                    BusSet::Feedback,
                )
                    .chain(),
            );
    }
}
