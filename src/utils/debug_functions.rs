//! Debug functions for the die viewer.
use bevy::{prelude::*, window::*};

use crate::utils::objects::{Die, to_color};
use die_core::constants::debug_constants::{NORMAL_GIZMO_COLOR, NORMAL_GIZMO_LENGTH};
use die_core::geometry::to_vec3;

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_vsync, visualize_normals));
    }
}

/// Toggles VSync when the 'V' key is pressed.
fn toggle_vsync(
    input: Res<ButtonInput<KeyCode>>,
    mut window: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !input.just_pressed(KeyCode::KeyV) {
        return;
    }
    let Ok(mut window) = window.single_mut() else {
        return;
    };

    window.present_mode = if matches!(window.present_mode, PresentMode::AutoVsync) {
        PresentMode::AutoNoVsync
    } else {
        PresentMode::AutoVsync
    };

    info!("PRESENT_MODE: {:?}", window.present_mode);
}

/// Draws the world space face normals when toggled with 'N'.
fn visualize_normals(
    mut gizmos: Gizmos,
    dice: Query<(&Die, &Transform)>,
    input: Res<ButtonInput<KeyCode>>,
    mut show_normals: Local<bool>,
) {
    if input.just_pressed(KeyCode::KeyN) {
        *show_normals = !*show_normals;
        info!("Normal visualization: {}", *show_normals);
    }

    if !*show_normals {
        return;
    }
    let color = to_color(NORMAL_GIZMO_COLOR);
    for (die, transform) in &dice {
        for face in die.faces.faces() {
            let start = transform.transform_point(to_vec3(face.center));
            let direction = transform.rotation * to_vec3(face.normal);
            gizmos.arrow(start, start + direction * NORMAL_GIZMO_LENGTH, color);
        }
    }
}
