//! Scene setup: shared materials and the die entities with their body and labels.
use bevy::prelude::*;
use std::sync::Arc;

use crate::utils::die_mesh::{create_body_mesh, create_face_mesh, create_label_image};
use crate::utils::objects::*;
use die_core::geometry::{to_quat, to_vec3};
use die_core::{DieConfig, DieFaces, RollState};

/// Builds the materials every die shares.
pub fn create_die_materials(
    config: &DieConfig,
    materials: &mut Assets<StandardMaterial>,
) -> DieMaterials {
    let body = materials.add(StandardMaterial {
        base_color: to_color(config.die.body_color),
        unlit: true,
        ..default()
    });

    // Blended: no depth write, drawn after the opaque body. Blended meshes sort back to front
    // by origin, so the nearer labels draw over the overlay.
    let overlay = materials.add(StandardMaterial {
        base_color: to_color(config.highlight.overlay_color),
        alpha_mode: AlphaMode::Blend,
        depth_bias: config.highlight.overlay_depth_bias,
        unlit: true,
        ..default()
    });

    DieMaterials { body, overlay }
}

/// Spawns one die with its body and the 20 face labels as children.
pub fn spawn_die(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
    die_materials: &DieMaterials,
    config: &DieConfig,
    translation: Vec3,
) -> Entity {
    let faces = Arc::new(DieFaces::icosahedron(config.die.radius));

    let die = commands
        .spawn((
            Die {
                faces: faces.clone(),
            },
            DieRoll(RollState::new(config.roll.duration_secs)),
            DieHighlight::default(),
            Transform::from_translation(translation),
            Visibility::default(),
        ))
        .id();

    // Solid body, shrunk so the wireframe edges stay visible
    commands.spawn((
        Mesh3d(meshes.add(create_body_mesh(&faces))),
        MeshMaterial3d(die_materials.body.clone()),
        Transform::from_scale(Vec3::splat(config.die.body_inset)),
        DieBody,
        ChildOf(die),
    ));

    let label_mesh = meshes.add(Rectangle::new(config.die.label_size, config.die.label_size));
    let mut labels = Vec::with_capacity(faces.len());
    let mut face_meshes = Vec::with_capacity(faces.len());

    for face in faces.faces() {
        let texture = images.add(create_label_image(face, config.die.label_texture_size));
        let material = materials.add(StandardMaterial {
            base_color: to_color(config.highlight.baseline_label_color),
            base_color_texture: Some(texture),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });

        let label = commands
            .spawn((
                Mesh3d(label_mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(to_vec3(face.center * config.die.label_offset))
                    .with_rotation(to_quat(face.rotation)),
                FaceLabel {
                    face_index: face.index,
                },
                ChildOf(die),
            ))
            .id();

        labels.push(label);
        face_meshes.push(meshes.add(create_face_mesh(face)));
    }

    commands.entity(die).insert(DieVisuals { face_meshes, labels });
    info!("Spawned die {:?} with {} faces at {}", die, faces.len(), translation);
    die
}

/// Startup system: shared materials and a single die at the origin.
pub fn setup_dice(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    settings: Res<DieSettings>,
) {
    let die_materials = create_die_materials(&settings.0, &mut materials);
    spawn_die(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut images,
        &die_materials,
        &settings.0,
        Vec3::ZERO,
    );
    commands.insert_resource(die_materials);
}
