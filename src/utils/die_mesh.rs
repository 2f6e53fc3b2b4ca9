//! Mesh and texture assets built from the derived die data.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, PrimitiveTopology, TextureDimension, TextureFormat};

use die_core::label::{LabelTexture, label_text};
use die_core::{DieFaces, Face};

/// Flat shaded body, one unindexed triangle per face.
pub fn create_body_mesh(faces: &DieFaces) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, faces.positions());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, faces.flat_normals());
    mesh
}

/// Single face triangle, the same geometry the body uses for it.
pub fn create_face_mesh(face: &Face) -> Mesh {
    let geometry = face.geometry();
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, geometry.positions.to_vec());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, geometry.normals.to_vec());
    mesh
}

/// Square label texture with the number of `face` in white on transparent.
pub fn create_label_image(face: &Face, size: u32) -> Image {
    let texture = LabelTexture::render(&label_text(face.index), size);
    Image::new(
        Extent3d {
            width: texture.size(),
            height: texture.size(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        texture.into_pixels(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}
