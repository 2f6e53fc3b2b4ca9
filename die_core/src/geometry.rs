//! Face derivation for the icosahedral die.
//!
//! The die body is a triangle soup: every three consecutive positions form one
//! independent face, there is no shared-vertex index. Face ordinals follow the
//! order of the soup and never change for the lifetime of a die.

use bevy_math::{DMat3, DQuat, DVec3, Quat, Vec3};

use crate::constants::game_constants::FACE_COUNT;

// Golden ratio, (1 + sqrt 5) / 2
const PHI: f64 = 1.618_033_988_749_895;

// Tolerance used to merge duplicated soup positions into shared edges
const EDGE_MERGE_EPSILON: f64 = 1e-9;

const ICOSAHEDRON_VERTICES: [[f64; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

const ICOSAHEDRON_TRIANGLES: [[usize; 3]; FACE_COUNT] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Positions of a regular icosahedron centered at the origin, as a triangle soup
/// of 20 counter-clockwise (outward facing) triangles.
///
/// Each triangle starts at its second table corner, so the first edge of face
/// `i` is the same edge a subdivision-free polyhedron builder would emit.
pub fn icosahedron_triangle_soup(radius: f64) -> Vec<DVec3> {
    ICOSAHEDRON_TRIANGLES
        .iter()
        .flat_map(|&[a, b, c]| [b, c, a])
        .map(|i| DVec3::from_array(ICOSAHEDRON_VERTICES[i]).normalize() * radius)
        .collect()
}

/// A single triangular face of the die, in object space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub index: usize,
    pub vertices: [DVec3; 3],
    /// Centroid of the three vertices.
    pub center: DVec3,
    /// Outward unit normal.
    pub normal: DVec3,
    /// Unit direction of the first edge, lies in the face plane.
    pub tangent: DVec3,
    /// `normal x tangent`, completes the right-handed frame.
    pub bitangent: DVec3,
    /// Rotation taking +X/+Y/+Z onto tangent/bitangent/normal. Lays a flat
    /// label (facing +Z) tangent to the face.
    pub rotation: DQuat,
}

impl Face {
    pub fn from_triangle(index: usize, [v1, v2, v3]: [DVec3; 3]) -> Self {
        let center = (v1 + v2 + v3) / 3.0;

        // Normalize the edges first so the cross product does not depend on edge lengths
        let edge1 = (v2 - v1).normalize();
        let edge2 = (v3 - v1).normalize();
        let normal = edge1.cross(edge2).normalize();
        let bitangent = normal.cross(edge1).normalize();

        let basis = DMat3::from_cols(edge1, bitangent, normal);
        let rotation = DQuat::from_mat3(&basis).normalize();

        Self {
            index,
            vertices: [v1, v2, v3],
            center,
            normal,
            tangent: edge1,
            bitangent,
            rotation,
        }
    }

    /// The number printed on this face.
    pub fn number(&self) -> u32 {
        self.index as u32 + 1
    }

    /// Standalone render geometry of this face, identical to the body triangle.
    pub fn geometry(&self) -> FaceGeometry {
        let normal = to_vec3(self.normal).to_array();
        FaceGeometry {
            positions: self.vertices.map(|v| to_vec3(v).to_array()),
            normals: [normal; 3],
        }
    }
}

/// Position and per-vertex normal buffers for one face triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGeometry {
    pub positions: [[f32; 3]; 3],
    pub normals: [[f32; 3]; 3],
}

/// All derived per-face data of one die, indexed by face ordinal.
#[derive(Clone, Debug, PartialEq)]
pub struct DieFaces {
    faces: Vec<Face>,
    edges: Vec<[DVec3; 2]>,
    circumradius: f64,
}

impl DieFaces {
    /// Regular icosahedron (d20) of the given circumradius.
    pub fn icosahedron(radius: f64) -> Self {
        Self::from_triangle_soup(&icosahedron_triangle_soup(radius))
    }

    /// Derives faces from a triangle soup. A trailing partial triangle is ignored.
    pub fn from_triangle_soup(positions: &[DVec3]) -> Self {
        let faces: Vec<Face> = positions
            .chunks_exact(3)
            .enumerate()
            .map(|(index, tri)| Face::from_triangle(index, [tri[0], tri[1], tri[2]]))
            .collect();

        let mut edges: Vec<[DVec3; 2]> = Vec::new();
        for face in &faces {
            let [a, b, c] = face.vertices;
            for [p, q] in [[a, b], [b, c], [c, a]] {
                let known = edges.iter().any(|&[e0, e1]| {
                    (e0.abs_diff_eq(p, EDGE_MERGE_EPSILON) && e1.abs_diff_eq(q, EDGE_MERGE_EPSILON))
                        || (e0.abs_diff_eq(q, EDGE_MERGE_EPSILON)
                            && e1.abs_diff_eq(p, EDGE_MERGE_EPSILON))
                });
                if !known {
                    edges.push([p, q]);
                }
            }
        }

        let circumradius = positions
            .iter()
            .map(|p| p.length())
            .fold(0.0_f64, f64::max);

        Self {
            faces,
            edges,
            circumradius,
        }
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn normals(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.faces.iter().map(|f| f.normal)
    }

    /// Unique edges of the body, used for the wireframe outline.
    pub fn edges(&self) -> &[[DVec3; 2]] {
        &self.edges
    }

    /// Distance from the origin to the farthest vertex.
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Body vertex positions in soup order.
    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.faces
            .iter()
            .flat_map(|f| f.vertices)
            .map(|v| to_vec3(v).to_array())
            .collect()
    }

    /// Flat vertex normals matching `positions`.
    pub fn flat_normals(&self) -> Vec<[f32; 3]> {
        self.faces
            .iter()
            .flat_map(|f| [to_vec3(f.normal).to_array(); 3])
            .collect()
    }
}

// Conversions at the boundary to the f32 render types

pub fn to_vec3(v: DVec3) -> Vec3 {
    v.as_vec3()
}

pub fn to_dvec3(v: Vec3) -> DVec3 {
    v.as_dvec3()
}

pub fn to_quat(q: DQuat) -> Quat {
    Quat::from_xyzw(q.x as f32, q.y as f32, q.z as f32, q.w as f32).normalize()
}

pub fn to_dquat(q: Quat) -> DQuat {
    DQuat::from_xyzw(q.x as f64, q.y as f64, q.z as f64, q.w as f64).normalize()
}
