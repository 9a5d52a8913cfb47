//! Directed boundary walks and point hit testing
//!
//! A path is a contiguous arc of the polygon's cyclic index sequence. It
//! always goes in the requested direction, even when the other way around
//! would be shorter.

use crate::core::settings::{MAX_POLYGON_POINTS, MIN_POLYGON_POINTS};
use crate::geometry::point::CanvasPoint;
use bevy::prelude::*;

/// Whether a polygon with this many points may be drawn
pub fn is_drawable_count(count: usize) -> bool {
    (MIN_POLYGON_POINTS..=MAX_POLYGON_POINTS).contains(&count)
}

/// Walks the polygon boundary from `start` to `end` inclusive.
///
/// Stepping is `+1 mod n` when `clockwise`, `-1 mod n` otherwise. Returns
/// `None` when either endpoint is missing, when they are equal, or when
/// either one does not index into a polygon of `point_count` points.
pub fn build_path(
    point_count: usize,
    start: Option<usize>,
    end: Option<usize>,
    clockwise: bool,
) -> Option<Vec<usize>> {
    let (start, end) = (start?, end?);
    if start == end || start >= point_count || end >= point_count {
        return None;
    }

    let mut path = Vec::with_capacity(point_count);
    path.push(start);

    let mut i = start;
    while i != end {
        i = if clockwise {
            (i + 1) % point_count
        } else {
            (i + point_count - 1) % point_count
        };
        path.push(i);
    }

    Some(path)
}

/// Returns the index of the first point strictly within `radius` of
/// `position`, checking points in index order.
pub fn hit_test(
    points: &[CanvasPoint],
    position: Vec2,
    radius: f32,
) -> Option<usize> {
    points
        .iter()
        .position(|point| point.distance_to(position) < radius)
}
