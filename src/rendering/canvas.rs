//! The drawing canvas: camera, background, gizmos and point labels

use crate::core::io::canvas_to_world;
use crate::core::settings::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::editing::Workspace;
use crate::rendering::draw::{
    render_workspace, GizmoSurface, PathGizmos, RecordingSurface, SurfaceOp,
};
use crate::systems::commands::BusSet;
use crate::ui::theme::*;
use bevy::gizmos::config::{DefaultGizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

/// Marks the text entities showing point labels
#[derive(Component)]
pub struct PointLabel;

pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<PathGizmos>()
            .add_systems(Startup, (setup_canvas, configure_gizmos))
            .add_systems(
                Update,
                (draw_workspace, sync_point_labels).after(BusSet::Feedback),
            );
    }
}

fn window_size(windows: &Query<&Window>) -> Vec2 {
    windows
        .single()
        .map(|window| window.size())
        .unwrap_or(Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT))
}

fn setup_canvas(mut commands: Commands, windows: Query<&Window>) {
    commands.spawn(Camera2d);

    let size = Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let center = canvas_to_world(size / 2.0, window_size(&windows));
    commands.spawn((
        Sprite::from_color(CANVAS_COLOR, size),
        Transform::from_translation(center.extend(0.0)),
    ));
}

/// System to configure gizmo appearance
fn configure_gizmos(mut gizmo_store: ResMut<GizmoConfigStore>) {
    let (config, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = GIZMO_LINE_WIDTH;
    let (config, _) = gizmo_store.config_mut::<PathGizmos>();
    config.line.width = PATH_LINE_WIDTH;
    debug!("Configured gizmo line widths");
}

fn draw_workspace(
    mut outline: Gizmos,
    mut path: Gizmos<PathGizmos>,
    workspace: Res<Workspace>,
    windows: Query<&Window>,
) {
    let mut surface = GizmoSurface {
        outline: &mut outline,
        path: &mut path,
        window_size: window_size(&windows),
    };
    render_workspace(&workspace, &mut surface);
}

/// Respawns the label texts whenever the workspace changes
fn sync_point_labels(
    mut commands: Commands,
    workspace: Res<Workspace>,
    labels: Query<Entity, With<PointLabel>>,
    windows: Query<&Window>,
) {
    if !workspace.is_changed() {
        return;
    }

    for entity in &labels {
        commands.entity(entity).despawn();
    }

    let mut surface = RecordingSurface::default();
    render_workspace(&workspace, &mut surface);

    let size = window_size(&windows);
    let (dx, dy) = POINT_LABEL_OFFSET;
    for op in surface.ops {
        if let SurfaceOp::Point { position, label } = op {
            let world = canvas_to_world(position + Vec2::new(dx, dy), size);
            commands.spawn((
                Text2d::new(label),
                TextFont {
                    font_size: POINT_LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(POINT_LABEL_COLOR),
                Transform::from_translation(world.extend(1.0)),
                PointLabel,
            ));
        }
    }
}
