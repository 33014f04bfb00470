//! Motion controller state machine.
//!
//! Owns the collector's lifecycle: builds the patrol path once at `start`,
//! plays the segment sequence from the per-frame tick, and handles the two
//! stop paths. A graceful stop waits out a randomized delay while playback
//! continues, then coasts straight ahead with linearly decaying speed under
//! the physics tick while the paired animation rate eases out quadratically.
//! An immediate stop freezes the collector within the current tick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::CharakConfig;
use crate::core::{Pose, WorldPoint};
use crate::path::PathBuilder;
use crate::playback::{plan_segments, SegmentPlayback};
use crate::terrain::TerrainQuery;

/// Lifecycle state of one collector's motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionState {
    /// No path built yet (or construction failed)
    Uninitialized,
    /// Playing the segment sequence
    Moving,
    /// Coasting straight ahead while speed decays to zero
    Decelerating,
    /// Terminal: no further motion or animation-rate driving
    Stopped,
}

/// Receives the playback-rate scalar for one animation-driving component.
///
/// Sinks are captured once at controller construction (the engine-side
/// equivalent walks the entity hierarchy). Only the Decelerating state
/// writes to them; Moving leaves them at full rate.
pub trait AnimationRateSink {
    /// Set the playback rate (1.0 = full speed, 0.0 = frozen).
    fn set_rate(&mut self, rate: f32);
}

/// Captured straight-line coast parameters; exists only while Decelerating.
#[derive(Clone, Copy, Debug)]
struct DecelerationContext {
    /// Fixed coast direction (unit, XZ plane)
    direction: WorldPoint,
    /// Speed at the moment deceleration began
    initial_speed: f32,
    /// Seconds elapsed since deceleration began
    elapsed: f32,
    /// Total deceleration duration in seconds
    duration: f32,
}

/// Patrol motion controller for one collector.
pub struct MotionController {
    config: CharakConfig,
    state: MotionState,
    playback: Option<SegmentPlayback>,
    /// Seconds until a requested graceful stop begins decelerating.
    /// Re-requesting replaces this; at most one pending at a time.
    pending_stop: Option<f32>,
    decel: Option<DecelerationContext>,
    sinks: Vec<Box<dyn AnimationRateSink>>,
    initial_anim_rate: f32,
    pose: Pose,
    rng: StdRng,
}

impl MotionController {
    /// Create a controller with entropy-seeded randomness.
    pub fn new(config: CharakConfig, sinks: Vec<Box<dyn AnimationRateSink>>) -> Self {
        Self::with_rng(config, sinks, StdRng::from_os_rng())
    }

    /// Create a controller with a fixed seed (deterministic stop timing).
    pub fn with_seed(
        config: CharakConfig,
        sinks: Vec<Box<dyn AnimationRateSink>>,
        seed: u64,
    ) -> Self {
        Self::with_rng(config, sinks, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: CharakConfig, sinks: Vec<Box<dyn AnimationRateSink>>, rng: StdRng) -> Self {
        Self {
            config,
            state: MotionState::Uninitialized,
            playback: None,
            pending_stop: None,
            decel: None,
            sinks,
            initial_anim_rate: 1.0,
            pose: Pose::default(),
            rng,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Current pose of the collector.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Build the patrol path and begin playback.
    ///
    /// Construction runs synchronously, once. On failure (fewer than 3
    /// waypoints) the controller logs a warning and stays Uninitialized;
    /// no motion ever occurs.
    pub fn start(&mut self, start_pose: Pose, waypoints: &[WorldPoint], terrain: &dyn TerrainQuery) {
        if self.state != MotionState::Uninitialized {
            tracing::warn!("start: ignored, controller already started");
            return;
        }

        let builder = PathBuilder::new(&self.config.patrol);
        let path = match builder.build(&start_pose, waypoints, terrain) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("patrol path construction failed: {}", e);
                return;
            }
        };

        let segments = plan_segments(
            &path,
            start_pose.heading,
            self.config.patrol.speed,
            self.config.patrol.turn_rate,
        );
        let playback = SegmentPlayback::new(segments, path.looped());
        if !playback.is_moving() {
            tracing::warn!("patrol path produced no playable segments");
            return;
        }

        self.pose = playback.pose();
        self.playback = Some(playback);
        self.state = MotionState::Moving;
        tracing::info!(
            "patrol started: {} path points, loop: {}",
            path.len(),
            path.looped()
        );
    }

    /// Per-frame tick: drives Moving-state interpolation and counts down a
    /// pending graceful-stop delay.
    pub fn update(&mut self, dt: f32) {
        if self.state == MotionState::Moving {
            if let Some(playback) = &mut self.playback {
                self.pose = playback.advance(dt);
                if !playback.is_moving() {
                    // Open path played to its end.
                    tracing::info!("patrol complete");
                    self.pending_stop = None;
                    self.state = MotionState::Stopped;
                }
            }
        }

        if let Some(remaining) = &mut self.pending_stop {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.pending_stop = None;
                if self.state == MotionState::Moving {
                    self.begin_deceleration();
                }
            }
        }
    }

    /// Fixed-timestep physics tick: drives Decelerating-state integration.
    ///
    /// Speed decays linearly over the captured duration while the animation
    /// rate eases out quadratically; heading stays frozen. At the end the
    /// sinks are forced to exactly zero and the state becomes Stopped.
    pub fn fixed_update(&mut self, dt: f32) {
        if self.state != MotionState::Decelerating {
            return;
        }
        let Some(ctx) = &mut self.decel else {
            return;
        };

        ctx.elapsed += dt;
        let t = (ctx.elapsed / ctx.duration).clamp(0.0, 1.0);

        let speed = ctx.initial_speed * (1.0 - t);
        self.pose.position = self.pose.position + ctx.direction * (speed * dt);

        let eased = t * t;
        let rate = self.initial_anim_rate * (1.0 - eased);
        for sink in &mut self.sinks {
            sink.set_rate(rate);
        }

        if t >= 1.0 {
            self.decel = None;
            for sink in &mut self.sinks {
                sink.set_rate(0.0);
            }
            self.state = MotionState::Stopped;
            tracing::info!("deceleration complete, collector stopped");
        }
    }

    /// Request a graceful stop: after a randomized delay, playback is cut
    /// and the collector coasts to a standstill.
    ///
    /// Only meaningful while Moving. A repeat request restarts the pending
    /// delay rather than queueing a second deceleration.
    pub fn request_graceful_stop(&mut self) {
        if self.state != MotionState::Moving {
            return;
        }
        let delay = sample_range(
            &mut self.rng,
            self.config.stop.delay_min,
            self.config.stop.delay_max,
        );
        if self.pending_stop.is_some() {
            tracing::debug!("graceful stop re-requested, delay restarted ({:.2}s)", delay);
        } else {
            tracing::info!("graceful stop requested, decelerating in {:.2}s", delay);
        }
        self.pending_stop = Some(delay);
    }

    /// Stop unconditionally: cancel any pending graceful stop, cut playback
    /// at the current pose, and become Stopped within this tick.
    pub fn request_immediate_stop(&mut self) {
        self.pending_stop = None;
        self.decel = None;
        if let Some(playback) = &mut self.playback {
            playback.stop();
        }
        self.state = MotionState::Stopped;
        tracing::info!("immediate stop");
    }

    fn begin_deceleration(&mut self) {
        let duration = sample_range(
            &mut self.rng,
            self.config.stop.decel_min,
            self.config.stop.decel_max,
        );
        self.decel = Some(DecelerationContext {
            direction: self.pose.forward(),
            initial_speed: self.config.patrol.speed,
            elapsed: 0.0,
            duration,
        });
        if let Some(playback) = &mut self.playback {
            playback.stop();
        }
        self.state = MotionState::Decelerating;
        tracing::info!("decelerating over {:.2}s", duration);
    }
}

/// Uniform sample from [min, max); returns `min` when the range is empty.
fn sample_range(rng: &mut StdRng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
