//! Roll triggers: mouse clicks and touch taps that hit a die, and the Space key.
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::utils::camera::viewport_ray;
use crate::utils::objects::{Die, DieCamera, DieSettings, RollRequested};
use die_core::constants::input_constants::TAP_MAX_DISTANCE;
use die_core::geometry::to_dvec3;
use die_core::picking::ray_sphere_hit;

/// Viewport positions where the user clicked or tapped this frame.
fn pointer_presses(
    mouse: &ButtonInput<MouseButton>,
    touches: &Touches,
    window: Option<&Window>,
) -> Vec<Vec2> {
    let mut positions = Vec::new();
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(position) = window.and_then(|w| w.cursor_position()) {
            positions.push(position);
        }
    }
    // A tap is a touch released close to where it started
    for touch in touches.iter_just_released() {
        if (touch.position() - touch.start_position()).length() <= TAP_MAX_DISTANCE {
            positions.push(touch.position());
        }
    }
    positions
}

/// Requests a roll of the nearest die under each click or tap.
pub fn pointer_roll_requests(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<DieCamera>>,
    dice: Query<(Entity, &Transform, &Die)>,
    mut requests: MessageWriter<RollRequested>,
) {
    let presses = pointer_presses(&mouse, &touches, windows.single().ok());
    if presses.is_empty() {
        return;
    }
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for position in presses {
        let Some(ray) = viewport_ray(camera, camera_transform, position) else {
            continue;
        };

        let nearest = dice
            .iter()
            .filter_map(|(entity, transform, die)| {
                let radius = die.faces.circumradius() * transform.scale.max_element() as f64;
                ray_sphere_hit(
                    to_dvec3(ray.origin),
                    to_dvec3(*ray.direction),
                    to_dvec3(transform.translation),
                    radius,
                )
                .map(|distance| (entity, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((die, _)) = nearest {
            requests.write(RollRequested { die });
        }
    }
}

/// Space rolls every die.
pub fn keyboard_roll_requests(
    keyboard: Res<ButtonInput<KeyCode>>,
    dice: Query<Entity, With<Die>>,
    mut requests: MessageWriter<RollRequested>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        for die in &dice {
            requests.write(RollRequested { die });
        }
    }
}

/// Rolls every die once after startup when `roll_on_start` is set.
pub fn roll_on_start(
    settings: Res<DieSettings>,
    dice: Query<Entity, With<Die>>,
    mut requests: MessageWriter<RollRequested>,
) {
    if !settings.0.roll_on_start {
        return;
    }
    for die in &dice {
        requests.write(RollRequested { die });
    }
}
