//! Interaction state machine for the control panel
//!
//! The machine decides which commands the user may issue at each step. It
//! does not trust the UI to have greyed out the right buttons. A disabled
//! command is simply refused and the state stays where it was.

use crate::geometry::is_drawable_count;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Where the user is in the draw-polygon, pick-endpoints, trace-path flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum ControlState {
    #[default]
    Idle,
    CreatePoints,
    PolygonDrawn,
    ChooseFirstPoint,
    ChooseSecondPoint,
    PathReady,
}

/// The user-facing commands, one per control panel button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Command {
    CreatePoints,
    DrawPolygon,
    ChooseFirstPoint,
    ChooseSecondPoint,
    ToggleDirection,
    Clear,
}

impl Command {
    /// Every command, in the order the buttons are laid out
    pub const ALL: [Command; 6] = [
        Command::CreatePoints,
        Command::DrawPolygon,
        Command::ChooseFirstPoint,
        Command::ChooseSecondPoint,
        Command::ToggleDirection,
        Command::Clear,
    ];
}

/// Which path endpoint a pick gesture writes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    First,
    Second,
}

impl ControlState {
    /// Whether `command` is available in this state.
    ///
    /// Drawing additionally needs a drawable point count. The two choosing
    /// states enable nothing, not even clear, until the pick lands.
    pub fn is_enabled(self, command: Command, point_count: usize) -> bool {
        use self::Command as C;
        use ControlState as S;

        match (self, command) {
            (S::Idle, C::CreatePoints) => true,
            (S::CreatePoints, C::DrawPolygon) => is_drawable_count(point_count),
            (S::CreatePoints, C::Clear) => true,
            (S::PolygonDrawn, C::ChooseFirstPoint)
            | (S::PolygonDrawn, C::ChooseSecondPoint)
            | (S::PolygonDrawn, C::Clear) => true,
            (S::PathReady, C::ToggleDirection) | (S::PathReady, C::Clear) => {
                true
            }
            _ => false,
        }
    }

    /// The state after `command`, or `None` when the command is refused.
    ///
    /// Clear is the one command honoured even where its button is greyed
    /// out: it returns every state to `Idle`, including `Idle` itself.
    pub fn apply(self, command: Command, point_count: usize) -> Option<Self> {
        if command == Command::Clear {
            return Some(ControlState::Idle);
        }
        if !self.is_enabled(command, point_count) {
            return None;
        }

        let next = match command {
            Command::CreatePoints => ControlState::CreatePoints,
            Command::DrawPolygon => ControlState::PolygonDrawn,
            Command::ChooseFirstPoint => ControlState::ChooseFirstPoint,
            Command::ChooseSecondPoint => ControlState::ChooseSecondPoint,
            Command::ToggleDirection => self,
            Command::Clear => ControlState::Idle,
        };
        Some(next)
    }

    /// The state after the workspace reports the current endpoints. This is
    /// accepted from any state.
    pub fn on_endpoints(first: Option<usize>, second: Option<usize>) -> Self {
        if first.is_some() && second.is_some() {
            ControlState::PathReady
        } else {
            ControlState::PolygonDrawn
        }
    }
}
