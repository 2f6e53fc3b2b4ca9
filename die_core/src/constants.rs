// Constants used by the die core and shared with the viewer application.

/// Generic constants
pub mod game_constants {
    // Number of faces on the die
    pub const FACE_COUNT: usize = 20;

    // Seed used by tests and as the documented example seed in the config file.
    pub const SEED: u64 = 69;

    // Environment variable overriding the config file location (native only)
    pub const CONFIG_ENV_VAR: &str = "ICOSA_DIE_CONFIG";
    pub const CONFIG_DEFAULT_PATH: &str = "assets/die.toml";
}

/// Die body
pub mod die_constants {
    pub const DIE_RADIUS: f64 = 1.0;

    // Solid body is shrunk slightly so it does not cover the wireframe edges
    pub const DIE_BODY_INSET: f32 = 0.99;

    pub const DIE_BODY_COLOR: [f32; 4] = [0.8, 0.0, 0.0, 1.0]; // 0xcc0000
    pub const DIE_EDGE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const DIE_EDGE_WIDTH: f32 = 5.0; // pixels
}

/// Face number labels
pub mod label_constants {
    pub const LABEL_SIZE: f32 = 0.3;
    // Labels float just above the face center
    pub const LABEL_OFFSET: f64 = 1.02;
    pub const LABEL_TEXTURE_SIZE: u32 = 128;
    pub const LABEL_MIN_TEXTURE_SIZE: u32 = 16;

    // Glyph height as a fraction of the texture size
    pub const LABEL_GLYPH_HEIGHT_RATIO: f32 = 0.6;
    // Underline for 6 and 9
    pub const LABEL_UNDERLINE_Y_RATIO: f32 = 0.8;
    pub const LABEL_UNDERLINE_WIDTH_PER_CHAR: f32 = 0.3;
    pub const LABEL_UNDERLINE_THICKNESS: u32 = 5;
}

/// Roll animation
pub mod roll_constants {
    pub const ROLL_DURATION_SECS: f64 = 2.0;

    // Face that should end up looking at the camera is rotated onto this axis
    pub const ROLL_REFERENCE_AXIS: [f64; 3] = [0.0, 0.0, 1.0];

    // Extra full turns per axis (inclusive ranges)
    pub const ROLL_TURNS_X: (u32, u32) = (2, 4);
    pub const ROLL_TURNS_Y: (u32, u32) = (2, 4);
    pub const ROLL_TURNS_Z: (u32, u32) = (1, 2);
}

/// Highlight of the face looking at the camera
pub mod highlight_constants {
    pub const HIGHLIGHT_LABEL_SCALE: f32 = 2.0;
    pub const HIGHLIGHT_LABEL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BASELINE_LABEL_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    pub const OVERLAY_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.6];
    pub const OVERLAY_INSET: f32 = 0.99;
    // Pulls the overlay towards the camera so it wins against the coplanar body face
    pub const OVERLAY_DEPTH_BIAS: f32 = 100.0;
}

/// Scene and camera
pub mod scene_constants {
    pub const BACKGROUND_COLOR: [f32; 4] = [0.91, 0.83, 0.72, 1.0]; // 0xe8d4b8

    // Half extent of the area that must stay visible on the shorter window side
    pub const VIEW_SIZE: f32 = 1.5;
    pub const CAMERA_DISTANCE: f32 = 5.0;
}

/// Pointer and touch input
pub mod input_constants {
    // A touch that moved further than this (pixels) is a drag, not a tap
    pub const TAP_MAX_DISTANCE: f32 = 10.0;
}

/// Debug drawing
pub mod debug_constants {
    pub const NORMAL_GIZMO_LENGTH: f32 = 0.4;
    pub const NORMAL_GIZMO_COLOR: [f32; 4] = [0.0, 0.4, 1.0, 1.0];
}
