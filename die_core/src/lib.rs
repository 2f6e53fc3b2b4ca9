//! Renderer independent core of the icosahedral die.
//!
//! - [`geometry`]: face centers, normals and label frames of the d20 body.
//! - [`roll`]: the idle / spinning roll driver.
//! - [`highlight`]: which face looks at the camera.
//! - [`label`]: face number text and texture pixels.
//! - [`picking`]: ray tests used to decide if a click hit a die.
//! - [`config`]: TOML configuration with defaults.
//!
//! Math runs in f64; the viewer converts to f32 at the render boundary
//! (see [`geometry::to_vec3`] and [`geometry::to_quat`]).

pub mod config;
pub mod constants;
pub mod geometry;
pub mod highlight;
pub mod label;
pub mod picking;
pub mod roll;

pub use config::{ConfigError, DieConfig};
pub use geometry::{DieFaces, Face, FaceGeometry};
pub use highlight::{HighlightChange, HighlightState};
pub use roll::{RollParams, RollState, RollStep};
