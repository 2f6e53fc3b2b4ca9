//! Die configuration loaded from a TOML file (`assets/die.toml` by default),
//! with defaults for every missing key.

use bevy_math::DVec3;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    die_constants::*, highlight_constants::*, label_constants::*, roll_constants::*,
    scene_constants::*,
};
use crate::roll::{RollParams, TurnRange};

/// Errors raised while loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed fine but a value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DieConfig {
    /// RNG seed, OS entropy when absent
    pub seed: Option<u64>,
    pub roll_on_start: bool,
    pub die: DieSection,
    pub roll: RollSection,
    pub highlight: HighlightSection,
    pub scene: SceneSection,
}

impl Default for DieConfig {
    fn default() -> Self {
        Self {
            seed: None,
            roll_on_start: true,
            die: DieSection::default(),
            roll: RollSection::default(),
            highlight: HighlightSection::default(),
            scene: SceneSection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DieSection {
    pub radius: f64,
    pub body_color: [f32; 4],
    pub body_inset: f32,
    pub edge_color: [f32; 4],
    pub edge_width: f32,
    pub label_size: f32,
    pub label_offset: f64,
    pub label_texture_size: u32,
}

impl Default for DieSection {
    fn default() -> Self {
        Self {
            radius: DIE_RADIUS,
            body_color: DIE_BODY_COLOR,
            body_inset: DIE_BODY_INSET,
            edge_color: DIE_EDGE_COLOR,
            edge_width: DIE_EDGE_WIDTH,
            label_size: LABEL_SIZE,
            label_offset: LABEL_OFFSET,
            label_texture_size: LABEL_TEXTURE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RollSection {
    pub duration_secs: f64,
    pub reference_axis: [f64; 3],
    pub turns_x: TurnRange,
    pub turns_y: TurnRange,
    pub turns_z: TurnRange,
}

impl Default for RollSection {
    fn default() -> Self {
        Self {
            duration_secs: ROLL_DURATION_SECS,
            reference_axis: ROLL_REFERENCE_AXIS,
            turns_x: TurnRange::new(ROLL_TURNS_X.0, ROLL_TURNS_X.1),
            turns_y: TurnRange::new(ROLL_TURNS_Y.0, ROLL_TURNS_Y.1),
            turns_z: TurnRange::new(ROLL_TURNS_Z.0, ROLL_TURNS_Z.1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HighlightSection {
    pub label_scale: f32,
    pub label_color: [f32; 4],
    pub baseline_label_color: [f32; 4],
    pub overlay_color: [f32; 4],
    pub overlay_inset: f32,
    pub overlay_depth_bias: f32,
}

impl Default for HighlightSection {
    fn default() -> Self {
        Self {
            label_scale: HIGHLIGHT_LABEL_SCALE,
            label_color: HIGHLIGHT_LABEL_COLOR,
            baseline_label_color: BASELINE_LABEL_COLOR,
            overlay_color: OVERLAY_COLOR,
            overlay_inset: OVERLAY_INSET,
            overlay_depth_bias: OVERLAY_DEPTH_BIAS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneSection {
    pub background: [f32; 4],
    pub view_size: f32,
    pub camera_distance: f32,
}

impl Default for SceneSection {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            view_size: VIEW_SIZE,
            camera_distance: CAMERA_DISTANCE,
        }
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
    }
}

impl DieConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: DieConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Like [`DieConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        positive("die.radius", self.die.radius)?;
        positive("die.body_inset", self.die.body_inset as f64)?;
        positive("die.edge_width", self.die.edge_width as f64)?;
        positive("die.label_size", self.die.label_size as f64)?;
        positive("die.label_offset", self.die.label_offset)?;
        positive("roll.duration_secs", self.roll.duration_secs)?;
        positive("highlight.label_scale", self.highlight.label_scale as f64)?;
        positive("highlight.overlay_inset", self.highlight.overlay_inset as f64)?;
        positive("scene.view_size", self.scene.view_size as f64)?;
        positive("scene.camera_distance", self.scene.camera_distance as f64)?;

        if self.die.label_texture_size < LABEL_MIN_TEXTURE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "die.label_texture_size must be at least {LABEL_MIN_TEXTURE_SIZE}, got {}",
                self.die.label_texture_size
            )));
        }

        let axis = DVec3::from_array(self.roll.reference_axis);
        if !axis.is_finite() || axis.length_squared() < 1e-12 {
            return Err(ConfigError::Invalid(format!(
                "roll.reference_axis must be a non-zero vector, got {:?}",
                self.roll.reference_axis
            )));
        }

        for (name, range) in [
            ("roll.turns_x", self.roll.turns_x),
            ("roll.turns_y", self.roll.turns_y),
            ("roll.turns_z", self.roll.turns_z),
        ] {
            if range.min > range.max {
                return Err(ConfigError::Invalid(format!(
                    "{name}: min {} is greater than max {}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }

    pub fn roll_params(&self) -> RollParams {
        RollParams {
            duration_secs: self.roll.duration_secs,
            reference_axis: DVec3::from_array(self.roll.reference_axis).normalize_or(DVec3::Z),
            turns: [self.roll.turns_x, self.roll.turns_y, self.roll.turns_z],
        }
    }
}
