//! Drawing the workspace onto a surface
//!
//! `render_workspace` is the only place that decides what is visible. The
//! surfaces just carry the primitive calls out, with gizmos on screen or
//! into a list of recorded operations.

use crate::editing::Workspace;
use crate::geometry::CanvasPoint;
use crate::ui::theme::*;
use bevy::prelude::*;

/// The primitive drawing calls the workspace needs
pub trait Surface {
    fn clear_surface(&mut self);
    fn draw_point(&mut self, x: f32, y: f32, label: &str);
    fn draw_polygon_outline(&mut self, points: &[CanvasPoint]);
    fn draw_path_line(&mut self, points: &[CanvasPoint]);
}

/// Draws the current workspace: the closed outline once the polygon is
/// drawn, every point with its label, and the traced path on top
pub fn render_workspace(workspace: &Workspace, surface: &mut impl Surface) {
    surface.clear_surface();

    let points = workspace.points();
    if workspace.polygon_drawn() {
        surface.draw_polygon_outline(points);
    }

    for (index, point) in points.iter().enumerate() {
        surface.draw_point(point.x, point.y, &CanvasPoint::label(index));
    }

    let path: Vec<CanvasPoint> = workspace
        .path_points()
        .iter()
        .filter_map(|&i| points.get(i).copied())
        .collect();
    if path.len() >= 2 {
        surface.draw_path_line(&path);
    }
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Point { position: Vec2, label: String },
    PolygonOutline(Vec<CanvasPoint>),
    PathLine(Vec<CanvasPoint>),
}

/// Surface that keeps the calls made since the last clear
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl Surface for RecordingSurface {
    fn clear_surface(&mut self) {
        self.ops.clear();
        self.ops.push(SurfaceOp::Clear);
    }

    fn draw_point(&mut self, x: f32, y: f32, label: &str) {
        self.ops.push(SurfaceOp::Point {
            position: Vec2::new(x, y),
            label: label.to_string(),
        });
    }

    fn draw_polygon_outline(&mut self, points: &[CanvasPoint]) {
        self.ops.push(SurfaceOp::PolygonOutline(points.to_vec()));
    }

    fn draw_path_line(&mut self, points: &[CanvasPoint]) {
        self.ops.push(SurfaceOp::PathLine(points.to_vec()));
    }
}

/// Gizmo group for the traced path, so it can be drawn thicker
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct PathGizmos;

/// Surface drawing with immediate-mode gizmos in world space. Labels are
/// not drawn here; see `sync_point_labels`.
pub struct GizmoSurface<'a, 'w, 's, 'pw, 'ps> {
    pub outline: &'a mut Gizmos<'w, 's>,
    pub path: &'a mut Gizmos<'pw, 'ps, PathGizmos>,
    pub window_size: Vec2,
}

impl GizmoSurface<'_, '_, '_, '_, '_> {
    fn to_world(&self, point: CanvasPoint) -> Vec2 {
        crate::core::io::canvas_to_world(point.into(), self.window_size)
    }
}

impl Surface for GizmoSurface<'_, '_, '_, '_, '_> {
    // Gizmos are redrawn from scratch every frame
    fn clear_surface(&mut self) {}

    fn draw_point(&mut self, x: f32, y: f32, _label: &str) {
        let center = self.to_world(CanvasPoint::new(x, y));
        self.outline
            .circle_2d(center, POINT_RADIUS * 0.5, POINT_FILL_COLOR);
        self.outline.circle_2d(center, POINT_RADIUS, POINT_OUTLINE_COLOR);
    }

    fn draw_polygon_outline(&mut self, points: &[CanvasPoint]) {
        let Some(&first) = points.first() else {
            return;
        };
        let mut positions: Vec<Vec2> =
            points.iter().map(|&p| self.to_world(p)).collect();
        positions.push(self.to_world(first));
        self.outline.linestrip_2d(positions, POLYGON_COLOR);
    }

    fn draw_path_line(&mut self, points: &[CanvasPoint]) {
        let positions: Vec<Vec2> =
            points.iter().map(|&p| self.to_world(p)).collect();
        self.path.linestrip_2d(positions, PATH_COLOR);
    }
}
