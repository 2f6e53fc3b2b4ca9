//! Declaration of the utils modules for icosa_die.

/// Components, systems and plugins of the die viewer
pub mod utils {
    pub mod camera;
    pub mod debug_functions;
    pub mod die_mesh;
    pub mod highlight;
    pub mod inputs;
    pub mod objects;
    pub mod rolling;
    pub mod settings;
    pub mod setup;
    pub mod systems_logic;
    pub mod wireframe;
}

pub use utils::systems_logic::{DiePlugin, DieSystems, RollPlugin};
