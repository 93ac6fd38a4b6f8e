//! Phase timelines and their autoplay timers.
//!
//! Each evolutionary phase has an integer progress percentage driven either
//! by the slider or by an autoplay timer that steps it once per period until
//! it reaches 100. Only the main-sequence timeline feeds the star model.

use std::time::Duration;

use bevy::prelude::*;

use crate::scene::update::UpdateMainSequence;
use crate::types::{StarSystemSet, ViewerSettings};

/// Autoplay step period in seconds.
pub const AUTOPLAY_PERIOD_SECS: f32 = 0.06;

/// Largest progress percentage.
pub const MAX_PERCENT: u8 = 100;

/// Evolutionary phase a timeline belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    PreMainSequence,
    MainSequence,
    PostMainSequence,
}

impl Phase {
    /// All phases in display order.
    pub const ALL: [Phase; 3] = [
        Phase::PreMainSequence,
        Phase::MainSequence,
        Phase::PostMainSequence,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::PreMainSequence => "Pre-main sequence",
            Phase::MainSequence => "Main sequence",
            Phase::PostMainSequence => "Post-main sequence",
        }
    }
}

/// Autoplay state of a timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoplayState {
    #[default]
    Stopped,
    Running,
}

/// Progress percentage of one phase plus its cancellable autoplay timer.
#[derive(Clone, Debug)]
pub struct PhaseTimeline {
    value: u8,
    state: AutoplayState,
    timer: Timer,
}

impl Default for PhaseTimeline {
    fn default() -> Self {
        Self::new(AUTOPLAY_PERIOD_SECS)
    }
}

impl PhaseTimeline {
    /// Create a stopped timeline at 0% stepping every `period_secs` when playing.
    pub fn new(period_secs: f32) -> Self {
        Self {
            value: 0,
            state: AutoplayState::Stopped,
            timer: Timer::from_seconds(period_secs, TimerMode::Repeating),
        }
    }

    /// Current progress percentage in [0, 100].
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Current progress as a fraction in [0, 1].
    pub fn fraction(&self) -> f64 {
        self.value as f64 / MAX_PERCENT as f64
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AutoplayState::Running
    }

    /// Start autoplay, rewinding to 0% first if already at the end.
    pub fn start(&mut self) {
        if self.value >= MAX_PERCENT {
            self.value = 0;
        }
        self.timer.reset();
        self.state = AutoplayState::Running;
    }

    /// Stop autoplay, keeping the current value.
    pub fn stop(&mut self) {
        self.state = AutoplayState::Stopped;
        self.timer.reset();
    }

    /// Play/pause button behavior.
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Manual slider input: cancels autoplay and sets the value (clamped to 100).
    pub fn set_value(&mut self, value: u8) {
        self.stop();
        self.value = value.min(MAX_PERCENT);
    }

    /// Advance the autoplay timer, stepping the value once per elapsed period.
    ///
    /// Stops on reaching 100. Returns whether the value changed.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.is_running() {
            return false;
        }

        self.timer.tick(delta);
        let steps = self.timer.times_finished_this_tick();

        let before = self.value;
        for _ in 0..steps {
            self.value = (self.value + 1).min(MAX_PERCENT);
            if self.value >= MAX_PERCENT {
                self.stop();
                break;
            }
        }
        self.value != before
    }
}

/// The three phase timelines shown in the control panel.
#[derive(Resource, Clone, Debug, Default)]
pub struct Timelines {
    pub pre_main_sequence: PhaseTimeline,
    pub main_sequence: PhaseTimeline,
    pub post_main_sequence: PhaseTimeline,
}

impl Timelines {
    /// Create timelines that step every `period_secs` while playing.
    pub fn with_period(period_secs: f32) -> Self {
        Self {
            pre_main_sequence: PhaseTimeline::new(period_secs),
            main_sequence: PhaseTimeline::new(period_secs),
            post_main_sequence: PhaseTimeline::new(period_secs),
        }
    }

    pub fn get(&self, phase: Phase) -> &PhaseTimeline {
        match phase {
            Phase::PreMainSequence => &self.pre_main_sequence,
            Phase::MainSequence => &self.main_sequence,
            Phase::PostMainSequence => &self.post_main_sequence,
        }
    }

    pub fn get_mut(&mut self, phase: Phase) -> &mut PhaseTimeline {
        match phase {
            Phase::PreMainSequence => &mut self.pre_main_sequence,
            Phase::MainSequence => &mut self.main_sequence,
            Phase::PostMainSequence => &mut self.post_main_sequence,
        }
    }
}

/// What a timeline control asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineAction {
    /// Play/pause button click
    Toggle,
    /// Slider moved to a percentage
    Set(u8),
}

/// Request from the UI or keyboard to drive a timeline.
#[derive(Message, Clone, Copy, Debug)]
pub struct TimelineCommand {
    pub phase: Phase,
    pub action: TimelineAction,
}

/// Plugin providing phase timelines and autoplay.
pub struct TimelinePlugin;

impl Plugin for TimelinePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<TimelineCommand>()
            .add_systems(Startup, init_timelines)
            .add_systems(Update, advance_timelines.in_set(StarSystemSet::Timeline));
    }
}

/// Create the timelines from settings and publish the initial main-sequence progress.
fn init_timelines(
    mut commands: Commands,
    settings: Option<Res<ViewerSettings>>,
    mut updates: MessageWriter<UpdateMainSequence>,
) {
    let period = settings
        .map(|s| s.autoplay_period)
        .unwrap_or(AUTOPLAY_PERIOD_SECS);
    let timelines = Timelines::with_period(period);

    updates.write(UpdateMainSequence {
        fraction: timelines.main_sequence.fraction(),
    });
    commands.insert_resource(timelines);
}

/// Apply timeline commands, step running autoplay timers and forward
/// main-sequence progress changes to the scene updater.
pub fn advance_timelines(
    time: Res<Time>,
    timelines: Option<ResMut<Timelines>>,
    mut commands: MessageReader<TimelineCommand>,
    mut updates: MessageWriter<UpdateMainSequence>,
) {
    let Some(mut timelines) = timelines else {
        return;
    };

    let before = timelines.main_sequence.value();

    for command in commands.read() {
        let timeline = timelines.get_mut(command.phase);
        match command.action {
            TimelineAction::Toggle => {
                timeline.toggle();
                info!(
                    "{} autoplay {}",
                    command.phase.label(),
                    if timeline.is_running() { "started" } else { "stopped" }
                );
            }
            TimelineAction::Set(value) => timeline.set_value(value),
        }
    }

    for phase in Phase::ALL {
        let timeline = timelines.get_mut(phase);
        let was_running = timeline.is_running();
        timeline.tick(time.delta());
        if was_running && !timeline.is_running() {
            info!("{} autoplay finished", phase.label());
        }
    }

    if timelines.main_sequence.value() != before {
        updates.write(UpdateMainSequence {
            fraction: timelines.main_sequence.fraction(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period() -> Duration {
        Duration::from_secs_f32(AUTOPLAY_PERIOD_SECS)
    }

    #[test]
    fn test_new_timeline_is_stopped_at_zero() {
        let timeline = PhaseTimeline::default();
        assert_eq!(timeline.value(), 0);
        assert_eq!(timeline.state(), AutoplayState::Stopped);
        assert_eq!(timeline.fraction(), 0.0);
    }

    #[test]
    fn test_stopped_timeline_ignores_ticks() {
        let mut timeline = PhaseTimeline::default();
        assert!(!timeline.tick(period() * 10));
        assert_eq!(timeline.value(), 0);
    }

    #[test]
    fn test_running_steps_once_per_period() {
        let mut timeline = PhaseTimeline::default();
        timeline.start();

        assert!(timeline.tick(period()));
        assert_eq!(timeline.value(), 1);

        // Half a period does not step
        assert!(!timeline.tick(period() / 2));
        assert_eq!(timeline.value(), 1);
    }

    #[test]
    fn test_long_frame_catches_up() {
        let mut timeline = PhaseTimeline::default();
        timeline.start();
        timeline.tick(period() * 5);
        assert_eq!(timeline.value(), 5);
    }

    #[test]
    fn test_stops_at_hundred() {
        let mut timeline = PhaseTimeline::default();
        timeline.set_value(98);
        timeline.start();

        timeline.tick(period() * 10);
        assert_eq!(timeline.value(), 100);
        assert_eq!(timeline.state(), AutoplayState::Stopped);
    }

    #[test]
    fn test_toggle_at_end_rewinds() {
        let mut timeline = PhaseTimeline::default();
        timeline.set_value(100);
        timeline.toggle();

        assert!(timeline.is_running());
        assert_eq!(timeline.value(), 0);
    }

    #[test]
    fn test_toggle_while_running_stops() {
        let mut timeline = PhaseTimeline::default();
        timeline.toggle();
        timeline.tick(period() * 3);
        timeline.toggle();

        assert!(!timeline.is_running());
        assert_eq!(timeline.value(), 3);
    }

    #[test]
    fn test_manual_input_cancels_autoplay() {
        let mut timeline = PhaseTimeline::default();
        timeline.start();
        timeline.set_value(40);

        assert!(!timeline.is_running());
        assert!(!timeline.tick(period()));
        assert_eq!(timeline.value(), 40);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut timeline = PhaseTimeline::default();
        timeline.set_value(250);
        assert_eq!(timeline.value(), 100);
    }

    #[test]
    fn test_timelines_are_independent() {
        let mut timelines = Timelines::default();
        timelines.get_mut(Phase::PreMainSequence).set_value(30);
        assert_eq!(timelines.get(Phase::PreMainSequence).value(), 30);
        assert_eq!(timelines.get(Phase::MainSequence).value(), 0);
        assert_eq!(timelines.get(Phase::PostMainSequence).value(), 0);
    }
}
