//! Points placed on the drawing canvas

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A point in canvas space (pixels, origin at the top-left corner, y down).
///
/// Points carry no id of their own. They are identified by their index in
/// the polygon, and they never move once placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to a position in the same space
    pub fn distance_to(&self, position: Vec2) -> f32 {
        Vec2::from(*self).distance(position)
    }

    /// Label shown next to the point, `p1` for index 0
    pub fn label(index: usize) -> String {
        format!("p{}", index + 1)
    }
}

impl From<Vec2> for CanvasPoint {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<CanvasPoint> for Vec2 {
    fn from(p: CanvasPoint) -> Self {
        Vec2::new(p.x, p.y)
    }
}
