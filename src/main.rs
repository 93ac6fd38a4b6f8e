//! Starscope - Main-Sequence Star Viewer
//!
//! A desktop application showing how a star's size, color and brightness
//! change with its mass and over its main-sequence lifetime.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use starscope::camera::CameraPlugin;
use starscope::input::InputPlugin;
use starscope::scene::ScenePlugin;
use starscope::timeline::TimelinePlugin;
use starscope::types::ViewerSettings;
use starscope::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Starscope".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(ViewerSettings::default())
        // Add viewer plugins
        .add_plugins((CameraPlugin, TimelinePlugin, ScenePlugin, InputPlugin, UiPlugin))
        .run();
}
