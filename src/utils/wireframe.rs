//! Die outline drawn with gizmo lines.
use bevy::prelude::*;

use crate::utils::objects::{Die, DieSettings, to_color};
use die_core::geometry::to_vec3;

/// Applies the configured edge width to the default gizmo group.
pub fn configure_wireframe(mut config_store: ResMut<GizmoConfigStore>, settings: Res<DieSettings>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = settings.0.die.edge_width;
}

/// Draws the unique edges of every die in its current pose.
pub fn draw_wireframes(
    mut gizmos: Gizmos,
    settings: Res<DieSettings>,
    dice: Query<(&Die, &Transform)>,
) {
    let color = to_color(settings.0.die.edge_color);
    for (die, transform) in &dice {
        for [start, end] in die.faces.edges() {
            gizmos.line(
                transform.transform_point(to_vec3(*start)),
                transform.transform_point(to_vec3(*end)),
                color,
            );
        }
    }
}
