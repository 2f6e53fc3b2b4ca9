//! Selection of the face looking at the camera.

use bevy_math::{DQuat, DVec3};

/// Finds the face whose world-space normal is most aligned with the direction
/// towards the camera (the negated camera forward).
///
/// Returns the face ordinal and the alignment (1.0 = facing the camera head on).
/// Ties keep the lowest ordinal.
pub fn closest_face<I>(
    normals: I,
    world_rotation: DQuat,
    camera_forward: DVec3,
) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = DVec3>,
{
    let toward_camera = -camera_forward.normalize();

    let mut best: Option<(usize, f64)> = None;
    for (index, normal) in normals.into_iter().enumerate() {
        let alignment = (world_rotation * normal).dot(toward_camera);
        match best {
            Some((_, best_alignment)) if alignment <= best_alignment => {}
            _ => best = Some((index, alignment)),
        }
    }
    best
}

/// A change of highlighted face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightChange {
    pub previous: Option<usize>,
    pub current: usize,
}

/// The currently highlighted face of one die.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightState {
    current: Option<usize>,
}

impl HighlightState {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Records `face` as highlighted. Returns the change to apply, or `None`
    /// when the face is already highlighted.
    pub fn select(&mut self, face: usize) -> Option<HighlightChange> {
        if self.current == Some(face) {
            return None;
        }
        let previous = self.current.replace(face);
        Some(HighlightChange {
            previous,
            current: face,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DieFaces;
    use bevy_math::EulerRot;

    #[test]
    fn camera_looking_down_a_normal_selects_that_face() {
        let faces = DieFaces::icosahedron(1.0);
        for face in faces.faces() {
            let (index, alignment) =
                closest_face(faces.normals(), DQuat::IDENTITY, -face.normal).expect("faces");
            assert_eq!(index, face.index);
            assert!((alignment - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn selection_uses_the_world_rotation() {
        let faces = DieFaces::icosahedron(1.0);
        let rotation = DQuat::from_euler(EulerRot::XYZ, 0.7, -2.1, 1.3);
        for face in faces.faces() {
            let world_normal = rotation * face.normal;
            let (index, alignment) =
                closest_face(faces.normals(), rotation, -world_normal).expect("faces");
            assert_eq!(index, face.index);
            assert!((alignment - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn ties_keep_the_first_face() {
        let normals = [DVec3::X, DVec3::Z, DVec3::Z];
        let (index, _) = closest_face(normals, DQuat::IDENTITY, DVec3::NEG_Z).expect("faces");
        assert_eq!(index, 1);
    }

    #[test]
    fn no_faces_no_selection() {
        assert_eq!(closest_face(std::iter::empty(), DQuat::IDENTITY, DVec3::NEG_Z), None);
    }

    #[test]
    fn highlight_reports_only_changes() {
        let mut state = HighlightState::default();
        assert_eq!(
            state.select(4),
            Some(HighlightChange {
                previous: None,
                current: 4
            })
        );
        assert_eq!(state.select(4), None);
        assert_eq!(
            state.select(9),
            Some(HighlightChange {
                previous: Some(4),
                current: 9
            })
        );
        assert_eq!(state.current(), Some(9));
    }
}
