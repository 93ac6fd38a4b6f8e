//! Common test utilities for integration tests.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use starscope::scene::StarModelPlugin;
use starscope::timeline::{AUTOPLAY_PERIOD_SECS, TimelinePlugin};

/// One autoplay step.
pub fn autoplay_period() -> Duration {
    Duration::from_secs_f32(AUTOPLAY_PERIOD_SECS)
}

/// Headless app running the star model and timelines, advancing `frame` per update.
pub fn star_model_app(frame: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
        .add_plugins((StarModelPlugin, TimelinePlugin));
    // Run startup so the star and timelines exist
    app.update();
    app
}
