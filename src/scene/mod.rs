//! Scene systems for the star viewer.
//!
//! This module spawns the star, keeps its look in sync with the stellar
//! model and animates it every frame.

pub mod animation;
mod environment;
pub mod star;
pub mod update;

use bevy::prelude::*;

use self::animation::{billboard_halo, spin_star};
use self::environment::EnvironmentPlugin;
use self::star::spawn_star;
use self::update::{apply_star_model, present_star};
use crate::camera::MainCamera;
use crate::types::{validate_mass, StarState, StarSystemSet, ViewerSettings, DEFAULT_MASS};
use crate::ui::readouts::Readouts;

// Re-export for use in other modules
pub use self::star::{StarBody, StarHalo, StarLight, STAR_POSITION};
pub use self::update::{SetMass, StarAppearance, UpdateMainSequence};

/// Plugin aggregating the star's scene and its update loop.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EnvironmentPlugin)
            .add_plugins(StarModelPlugin)
            .add_systems(Startup, spawn_star)
            .add_systems(PostStartup, verify_scene)
            .add_systems(
                Update,
                (
                    present_star
                        .run_if(resource_changed::<StarAppearance>)
                        .in_set(StarSystemSet::Animate),
                    (spin_star, billboard_halo)
                        .chain()
                        .in_set(StarSystemSet::Animate),
                ),
            );
    }
}

/// Star state, messages and the model update, without any rendering.
///
/// Split out so headless apps can drive the model on its own.
pub struct StarModelPlugin;

impl Plugin for StarModelPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SetMass>()
            .add_message::<UpdateMainSequence>()
            .init_resource::<StarAppearance>()
            .init_resource::<Readouts>()
            .configure_sets(
                Update,
                (
                    StarSystemSet::Input,
                    StarSystemSet::Timeline,
                    StarSystemSet::Model,
                    StarSystemSet::Animate,
                )
                    .chain(),
            )
            .add_systems(PreStartup, init_star_state)
            .add_systems(Update, apply_star_model.in_set(StarSystemSet::Model));
    }
}

/// Create the star from settings unless one was inserted already.
fn init_star_state(
    mut commands: Commands,
    settings: Option<Res<ViewerSettings>>,
    existing: Option<Res<StarState>>,
) {
    if existing.is_some() {
        return;
    }

    let settings = settings.map(|s| s.clone()).unwrap_or_default();
    let mass = validate_mass(settings.initial_mass).unwrap_or_else(|err| {
        warn!("Invalid initial mass ({}), using {} M☉", err, DEFAULT_MASS);
        DEFAULT_MASS
    });
    let mut star = StarState::with_mass(mass);
    star.spin = settings.spin;

    info!("Star initialized at {} M☉", star.mass);
    commands.insert_resource(star);
}

/// Report scene parts that failed to spawn.
///
/// The viewer keeps running without them; their updates are skipped.
fn verify_scene(
    bodies: Query<(), With<StarBody>>,
    halos: Query<(), With<StarHalo>>,
    lights: Query<(), With<StarLight>>,
    cameras: Query<(), With<MainCamera>>,
) {
    let missing: Vec<&str> = [
        ("star", bodies.is_empty()),
        ("halo", halos.is_empty()),
        ("light", lights.is_empty()),
        ("camera", cameras.is_empty()),
    ]
    .into_iter()
    .filter_map(|(name, absent)| absent.then_some(name))
    .collect();

    if missing.is_empty() {
        info!("Scene ready");
    } else {
        warn!("Scene is missing: {}", missing.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use approx::assert_relative_eq;

    use super::*;
    use crate::model::radius_from_mass;
    use crate::test_utils::bevy_test::star_model_app;
    use crate::timeline::{Phase, TimelineAction, TimelineCommand};

    fn app() -> App {
        let mut app = star_model_app(Duration::from_millis(16));
        app.update();
        app
    }

    #[test]
    fn test_startup_shows_the_sun() {
        let app = app();
        let star = app.world().resource::<StarState>();
        assert_eq!(star.mass, 1.0);
        assert_eq!(star.radius, 1.0);

        let readouts = app.world().resource::<Readouts>();
        assert_eq!(readouts.stage, "Main sequence");
        assert_eq!(readouts.abs_magnitude, "4.83");
    }

    #[test]
    fn test_set_mass_reruns_main_sequence() {
        let mut app = app();
        app.world_mut().write_message(SetMass(2.0));
        app.update();

        let star = app.world().resource::<StarState>();
        assert_eq!(star.mass, 2.0);
        assert_relative_eq!(star.radius, radius_from_mass(2.0), epsilon = 1e-12);
        assert_eq!(app.world().resource::<Readouts>().mass, "2 M☉");
    }

    #[test]
    fn test_invalid_mass_is_ignored() {
        let mut app = app();
        let before = app.world().resource::<StarState>().clone();

        app.world_mut().write_message(SetMass(f64::NAN));
        app.world_mut().write_message(SetMass(-1.0));
        app.update();

        assert_eq!(*app.world().resource::<StarState>(), before);
    }

    #[test]
    fn test_mass_change_uses_current_progress() {
        let mut app = app();
        app.world_mut().write_message(TimelineCommand {
            phase: Phase::MainSequence,
            action: TimelineAction::Set(50),
        });
        app.update();
        app.world_mut().write_message(SetMass(4.0));
        app.update();

        let star = app.world().resource::<StarState>();
        assert_relative_eq!(star.radius, radius_from_mass(4.0) * 1.06, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_initial_mass_falls_back_to_default() {
        let mut app = star_model_app(Duration::from_millis(16));
        app.insert_resource(ViewerSettings {
            initial_mass: -2.0,
            ..default()
        });
        app.update();

        let star = app.world().resource::<StarState>();
        assert_eq!(star.mass, DEFAULT_MASS);
        assert_eq!(star.radius, 1.0);
        assert!(app.world().resource::<StarAppearance>().scale.is_finite());
    }

    #[test]
    fn test_other_phases_do_not_move_the_star() {
        let mut app = app();
        app.world_mut().write_message(TimelineCommand {
            phase: Phase::PostMainSequence,
            action: TimelineAction::Set(80),
        });
        app.update();

        assert_eq!(app.world().resource::<StarState>().radius, 1.0);
    }
}
