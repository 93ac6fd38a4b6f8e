//! Test utilities for the stellar model and viewer systems.
//!
//! Provides reference stars and headless apps wired with the model plugins.

/// Fixtures for reference stars across the calibrated mass range.
pub mod fixtures {
    /// Masses spanning the calibrated range, in solar masses.
    pub const REFERENCE_MASSES: [f64; 6] = [0.1, 0.5, 1.0, 2.0, 10.0, 50.0];

    /// A late M dwarf.
    pub const RED_DWARF: f64 = 0.1;

    /// An early O star.
    pub const O_STAR: f64 = 50.0;
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use std::time::Duration;

    use bevy::prelude::*;
    use bevy::time::TimeUpdateStrategy;

    use crate::scene::StarModelPlugin;
    use crate::timeline::TimelinePlugin;

    /// Create a minimal Bevy app for testing without rendering.
    ///
    /// This app uses MinimalPlugins for a lightweight test environment.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }

    /// Headless app running the star model and timelines with a fixed frame time.
    pub fn star_model_app(frame: Duration) -> App {
        let mut app = headless_app();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(frame))
            .add_plugins((StarModelPlugin, TimelinePlugin));
        app
    }
}
