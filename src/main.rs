//! Start-up for icosa_die, with window, plugins, and resources.

use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::*,
};

use icosa_die::{
    DiePlugin,
    utils::{debug_functions::DebugFunctionsPlugin, settings::load_settings},
};

/// Entry point for the application
fn main() {
    let window = Some(Window {
        title: "Icosahedral Die".into(),
        #[cfg(target_arch = "wasm32")]
        canvas: Some("#die-canvas".into()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    });

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: window,
                ..default()
            }),
            LogDiagnosticsPlugin::default(),
            FrameTimeDiagnosticsPlugin::default(),
        ))
        // Loaded here so the log plugin is up when the config is reported
        .insert_resource(load_settings())
        .add_plugins((DiePlugin, DebugFunctionsPlugin))
        .run();
}
