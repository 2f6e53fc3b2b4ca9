//! Components, resources and messages of the die viewer.
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

use die_core::{DieConfig, DieFaces, HighlightState, RollState};

/// A die. Derived face data is shared with the systems that need it.
#[derive(Component, Clone)]
pub struct Die {
    pub faces: Arc<DieFaces>,
}

/// Roll driver of one die
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct DieRoll(pub RollState);

/// Highlighted face of one die and its lazily spawned overlay
#[derive(Component, Debug, Default)]
pub struct DieHighlight {
    pub state: HighlightState,
    pub overlay: Option<Entity>,
}

/// Render handles created for a die, indexed by face ordinal.
#[derive(Component, Debug, Default)]
pub struct DieVisuals {
    // Standalone triangle of each face, shown under the overlay
    pub face_meshes: Vec<Handle<Mesh>>,
    pub labels: Vec<Entity>,
}

/// The solid body child of a die
#[derive(Component)]
pub struct DieBody;

/// Number plane of a face
#[derive(Component)]
pub struct FaceLabel {
    pub face_index: usize,
}

/// Translucent cover of the highlighted face
#[derive(Component)]
pub struct HighlightOverlay;

/// The camera looking at the dice
#[derive(Component)]
pub struct DieCamera;

/// Loaded configuration
#[derive(Resource, Clone, Debug, Default)]
pub struct DieSettings(pub DieConfig);

/// Materials shared by every die
#[derive(Resource)]
pub struct DieMaterials {
    pub body: Handle<StandardMaterial>,
    pub overlay: Handle<StandardMaterial>,
}

/// Random number generator
#[derive(Resource)]
pub struct RandomGen {
    pub random_gen: ChaCha8Rng,
}

impl RandomGen {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, otherwise from OS entropy
    pub fn from_config(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self {
                random_gen: ChaCha8Rng::from_rng(&mut rand::rng()),
            },
        }
    }
}

/// Asks a die to roll. Dropped if the die is already spinning.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollRequested {
    pub die: Entity,
}

/// A die came to rest
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollSettled {
    pub die: Entity,
    pub face_index: usize,
    /// Number printed on the face now looking at the camera
    pub value: u32,
}

pub fn to_color([r, g, b, a]: [f32; 4]) -> Color {
    Color::srgba(r, g, b, a)
}
