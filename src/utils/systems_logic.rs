//! Plugins wiring the die systems into the app.

use bevy::prelude::*;

use crate::utils::camera::spawn_die_camera;
use crate::utils::highlight::update_highlight;
use crate::utils::inputs::{keyboard_roll_requests, pointer_roll_requests, roll_on_start};
use crate::utils::objects::{DieSettings, RandomGen, RollRequested, RollSettled};
use crate::utils::rolling::{animate_rolls, start_requested_rolls};
use crate::utils::settings::load_settings;
use crate::utils::setup::setup_dice;
use crate::utils::wireframe::{configure_wireframe, draw_wireframes};

/// Frame stages, run in this order
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DieSystems {
    /// Turn user input into roll requests
    Input,
    /// Start and advance rolls
    Roll,
    /// Highlight and outline from the final pose of the frame
    Present,
}

/// Roll state machine only, no rendering or input. Uses the `DieSettings`
/// already in the app or the defaults.
pub struct RollPlugin;

impl Plugin for RollPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DieSettings>();
        if !app.world().contains_resource::<RandomGen>() {
            let seed = app.world().resource::<DieSettings>().0.seed;
            app.insert_resource(RandomGen::from_config(seed));
        }

        app.add_message::<RollRequested>()
            .add_message::<RollSettled>()
            .configure_sets(
                Update,
                (DieSystems::Input, DieSystems::Roll, DieSystems::Present).chain(),
            )
            .add_systems(
                Update,
                (start_requested_rolls, animate_rolls)
                    .chain()
                    .in_set(DieSystems::Roll),
            );
    }
}

/// The complete viewer: config, scene, input, rolls and highlight.
pub struct DiePlugin;

impl Plugin for DiePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<DieSettings>() {
            app.insert_resource(load_settings());
        }

        app.add_plugins(RollPlugin)
            .add_systems(Startup, (spawn_die_camera, setup_dice, configure_wireframe))
            .add_systems(PostStartup, roll_on_start)
            .add_systems(
                Update,
                (pointer_roll_requests, keyboard_roll_requests).in_set(DieSystems::Input),
            )
            .add_systems(
                Update,
                (update_highlight, draw_wireframes).in_set(DieSystems::Present),
            );
    }
}
