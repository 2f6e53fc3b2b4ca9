//! Highlight of the face looking at the camera.
//!
//! The highlighted label is scaled up and recolored, and one translucent
//! overlay per die is moved onto the face by swapping its mesh handle.
use bevy::prelude::*;

use crate::utils::objects::*;
use die_core::geometry::{to_dquat, to_dvec3};
use die_core::highlight::closest_face;

pub fn update_highlight(
    mut commands: Commands,
    settings: Res<DieSettings>,
    die_materials: Option<Res<DieMaterials>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cameras: Query<&GlobalTransform, With<DieCamera>>,
    mut dice: Query<(Entity, &Die, &Transform, &mut DieHighlight, &DieVisuals)>,
    mut labels: Query<
        (&mut Transform, &MeshMaterial3d<StandardMaterial>),
        (With<FaceLabel>, Without<Die>),
    >,
    mut overlays: Query<&mut Mesh3d, With<HighlightOverlay>>,
) {
    let Ok(camera_transform) = cameras.single() else {
        return;
    };
    let Some(die_materials) = die_materials else {
        return;
    };
    let highlight = &settings.0.highlight;
    let camera_forward = to_dvec3(*camera_transform.forward());

    for (entity, die, transform, mut die_highlight, visuals) in &mut dice {
        let Some((face_index, _)) =
            closest_face(die.faces.normals(), to_dquat(transform.rotation), camera_forward)
        else {
            continue;
        };
        let Some(change) = die_highlight.state.select(face_index) else {
            continue;
        };
        debug!("Die {:?} highlight {:?} -> {}", entity, change.previous, change.current);

        // Back to baseline
        if let Some(previous) = change.previous {
            if let Some(label) = visuals.labels.get(previous) {
                if let Ok((mut label_transform, material)) = labels.get_mut(*label) {
                    label_transform.scale = Vec3::ONE;
                    if let Some(mut material) = materials.get_mut(&material.0) {
                        material.base_color = to_color(highlight.baseline_label_color);
                    }
                }
            }
        }

        if let Some(label) = visuals.labels.get(change.current) {
            if let Ok((mut label_transform, material)) = labels.get_mut(*label) {
                label_transform.scale = Vec3::splat(highlight.label_scale);
                if let Some(mut material) = materials.get_mut(&material.0) {
                    material.base_color = to_color(highlight.label_color);
                }
            }
        }

        let Some(face_mesh) = visuals.face_meshes.get(change.current) else {
            continue;
        };
        match die_highlight.overlay {
            Some(overlay) => {
                if let Ok(mut mesh) = overlays.get_mut(overlay) {
                    mesh.0 = face_mesh.clone();
                }
            }
            None => {
                let overlay = commands
                    .spawn((
                        Mesh3d(face_mesh.clone()),
                        MeshMaterial3d(die_materials.overlay.clone()),
                        Transform::from_scale(Vec3::splat(highlight.overlay_inset)),
                        HighlightOverlay,
                        ChildOf(entity),
                    ))
                    .id();
                die_highlight.overlay = Some(overlay);
            }
        }
    }
}
