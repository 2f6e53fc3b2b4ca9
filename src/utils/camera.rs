//! Orthographic camera looking at the dice along the roll reference axis.

use bevy::camera::ScalingMode;
use bevy::prelude::*;

use crate::utils::objects::{DieCamera, DieSettings, to_color};

/// Up vector for a camera placed on `axis`, Y unless the axis is vertical.
pub fn camera_up(axis: Vec3) -> Vec3 {
    if axis.normalize_or_zero().dot(Vec3::Y).abs() > 0.99 {
        Vec3::Z
    } else {
        Vec3::Y
    }
}

/// Spawns the camera and sets the clear color.
///
/// The projection keeps a square of `2 * view_size` visible on the shorter
/// window side, so the die fits both landscape and portrait windows.
pub fn spawn_die_camera(mut commands: Commands, settings: Res<DieSettings>) {
    let scene = &settings.0.scene;
    let axis = Vec3::from_array(settings.0.roll.reference_axis.map(|v| v as f32))
        .normalize_or(Vec3::Z);
    let extent = 2.0 * scene.view_size;

    commands.insert_resource(ClearColor(to_color(scene.background)));
    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: extent,
                min_height: extent,
            },
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(axis * scene.camera_distance)
            .looking_at(Vec3::ZERO, camera_up(axis)),
        DieCamera,
    ));
}

/// World space ray under a viewport position.
pub fn viewport_ray(camera: &Camera, transform: &GlobalTransform, position: Vec2) -> Option<Ray3d> {
    camera.viewport_to_world(transform, position).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_vector_is_never_parallel_to_the_view_axis() {
        for axis in [Vec3::Z, Vec3::X, Vec3::Y, Vec3::NEG_Y, Vec3::new(1.0, 1.0, 1.0)] {
            let up = camera_up(axis);
            assert!(axis.normalize().cross(up).length() > 0.1, "{axis}");
        }
    }
}
