//! The drawing workspace: placed points, polygon and traced path
//!
//! All geometry lives here. The control panel only ever learns about it
//! through `WorkspaceSignal`s.

use crate::core::settings::HIT_RADIUS;
use crate::core::state::Role;
use crate::data::SavedCanvas;
use crate::geometry::{build_path, hit_test, is_drawable_count, CanvasPoint};
use bevy::prelude::*;

/// What a canvas click currently does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClickMode {
    /// Clicks are ignored
    #[default]
    Inactive,
    /// Clicks append points
    PlacePoints,
    /// The next click on a point picks it for this role
    PickEndpoint(Role),
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Workspace {
    points: Vec<CanvasPoint>,
    path_points: Vec<usize>,
    first_point_index: Option<usize>,
    second_point_index: Option<usize>,
    clockwise: bool,
    polygon_drawn: bool,
    click_mode: ClickMode,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            path_points: Vec::new(),
            first_point_index: None,
            second_point_index: None,
            clockwise: true,
            polygon_drawn: false,
            click_mode: ClickMode::Inactive,
        }
    }
}

impl Workspace {
    pub fn points(&self) -> &[CanvasPoint] {
        &self.points
    }

    pub fn path_points(&self) -> &[usize] {
        &self.path_points
    }

    pub fn endpoints(&self) -> (Option<usize>, Option<usize>) {
        (self.first_point_index, self.second_point_index)
    }

    pub fn clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn polygon_drawn(&self) -> bool {
        self.polygon_drawn
    }

    pub fn click_mode(&self) -> ClickMode {
        self.click_mode
    }

    /// Arms point placement. Returns false if it was already armed.
    pub fn start_placing(&mut self) -> bool {
        if self.click_mode == ClickMode::PlacePoints {
            return false;
        }
        self.click_mode = ClickMode::PlacePoints;
        true
    }

    /// Appends a point while placement is armed, returning the new count.
    /// The count is not capped here; only drawing checks it.
    pub fn place_point(&mut self, position: Vec2) -> Option<usize> {
        if self.click_mode != ClickMode::PlacePoints {
            return None;
        }
        self.points.push(CanvasPoint::from(position));
        Some(self.points.len())
    }

    /// Stops placement and closes the polygon if it has a drawable number
    /// of points. Returns whether the polygon is now drawn.
    pub fn draw_polygon(&mut self) -> bool {
        if self.click_mode == ClickMode::PlacePoints {
            self.click_mode = ClickMode::Inactive;
        }
        if is_drawable_count(self.points.len()) {
            self.polygon_drawn = true;
        }
        self.polygon_drawn
    }

    /// Arms the hit-test listener for one endpoint role
    pub fn arm_pick(&mut self, role: Role) {
        self.click_mode = ClickMode::PickEndpoint(role);
    }

    /// Tries to pick an endpoint at `position`.
    ///
    /// On a hit the index is written for the armed role and the listener
    /// disarms. On a miss nothing changes and the listener stays armed.
    pub fn pick(&mut self, position: Vec2) -> Option<usize> {
        let ClickMode::PickEndpoint(role) = self.click_mode else {
            return None;
        };
        let index = hit_test(&self.points, position, HIT_RADIUS)?;

        match role {
            Role::First => self.first_point_index = Some(index),
            Role::Second => self.second_point_index = Some(index),
        }
        self.click_mode = ClickMode::Inactive;
        Some(index)
    }

    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.clockwise = clockwise;
    }

    /// Recomputes the path from the current points, endpoints and
    /// direction. On an invalid request the previous path is kept and
    /// `None` is returned.
    pub fn rebuild_path(&mut self) -> Option<&[usize]> {
        let path = build_path(
            self.points.len(),
            self.first_point_index,
            self.second_point_index,
            self.clockwise,
        )?;
        self.path_points = path;
        Some(&self.path_points)
    }

    /// Back to an empty canvas. Safe to call any number of times.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Takes over a saved canvas. The saved polygon is always a drawn one.
    pub fn restore(&mut self, record: SavedCanvas) {
        self.points = record.points;
        self.path_points = record.path_points;
        self.first_point_index = record.first_point_index;
        self.second_point_index = record.second_point_index;
        self.clockwise = record.clockwise;
        self.polygon_drawn = is_drawable_count(self.points.len());
        self.click_mode = ClickMode::Inactive;
    }

    pub fn snapshot(&self) -> SavedCanvas {
        SavedCanvas {
            points: self.points.clone(),
            path_points: self.path_points.clone(),
            first_point_index: self.first_point_index,
            second_point_index: self.second_point_index,
            clockwise: self.clockwise,
        }
    }
}
