//! End-to-End Patrol Scenarios
//!
//! Drives the full pipeline (waypoints → path → segments → controller)
//! through the scenarios the subsystem must survive:
//! - Square loop patrol cycling indefinitely
//! - Immediate stop freezing the pose within one tick
//! - Graceful stop: delay, linear speed decay, eased animation rate
//! - Construction failure on too few waypoints, with no motion and no panic
//!
//! Run with: `cargo test --test patrol_integration`

use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;
use charak_nav::terrain::{FlatTerrain, NoTerrain};
use charak_nav::{
    AnimationRateSink, CharakConfig, MotionController, MotionState, PathBuilder, PatrolConfig,
    Pose, StopConfig, WorldPoint,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const PHYSICS_DT: f32 = 1.0 / 50.0;

// ============================================================================
// Fixtures
// ============================================================================

fn square_waypoints() -> Vec<WorldPoint> {
    vec![
        WorldPoint::new(10.0, 0.0, 0.0),
        WorldPoint::new(10.0, 0.0, 10.0),
        WorldPoint::new(0.0, 0.0, 10.0),
        WorldPoint::new(0.0, 0.0, 0.0),
    ]
}

/// Scenario config: speed 5, turn rate 90°/unit, deterministic stop timing
/// (1s delay, 4s deceleration).
fn scenario_config() -> CharakConfig {
    CharakConfig {
        patrol: PatrolConfig {
            speed: 5.0,
            turn_rate: 90.0,
            ..PatrolConfig::default()
        },
        stop: StopConfig {
            delay_min: 1.0,
            delay_max: 1.0,
            decel_min: 4.0,
            decel_max: 4.0,
        },
    }
}

struct RecordingSink(Arc<Mutex<Vec<f32>>>);

impl AnimationRateSink for RecordingSink {
    fn set_rate(&mut self, rate: f32) {
        self.0.lock().unwrap().push(rate);
    }
}

/// Tick frame and physics together for `seconds` of simulated time.
fn run_for(controller: &mut MotionController, seconds: f32) {
    let mut t = 0.0;
    let mut accum = 0.0;
    while t < seconds {
        controller.update(FRAME_DT);
        accum += FRAME_DT;
        while accum >= PHYSICS_DT {
            controller.fixed_update(PHYSICS_DT);
            accum -= PHYSICS_DT;
        }
        t += FRAME_DT;
    }
}

// ============================================================================
// Square loop scenario
// ============================================================================

#[test]
fn square_loop_cycles_indefinitely() {
    let mut controller = MotionController::with_seed(scenario_config(), Vec::new(), 42);
    controller.start(Pose::default(), &square_waypoints(), &FlatTerrain::new(0.0));
    assert_eq!(controller.state(), MotionState::Moving);

    // One circuit of the 10x10 square at speed 5 takes well under 20s;
    // after 60s the loop must still be playing.
    run_for(&mut controller, 60.0);
    assert_eq!(controller.state(), MotionState::Moving);

    // The collector stays in the square's neighborhood. Arc spans can bow
    // several units outside the waypoint square, so the bound is loose.
    let pos = controller.pose().position;
    assert!(pos.x > -8.0 && pos.x < 18.0, "x drifted to {}", pos.x);
    assert!(pos.z > -8.0 && pos.z < 18.0, "z drifted to {}", pos.z);
}

#[test]
fn square_loop_path_closes() {
    let start = Pose::new(WorldPoint::new(10.0, 0.0, 0.0), 0.0);
    let builder = PathBuilder::new(&PatrolConfig::default());
    let path = builder
        .build(&start, &square_waypoints(), &FlatTerrain::new(0.0))
        .unwrap();

    assert!(path.looped());
    let first = path.first().unwrap();
    let last = path.last().unwrap();
    assert!(
        first.distance_xz(last) < 1e-3,
        "loop gap {}",
        first.distance_xz(last)
    );
}

#[test]
fn immediate_stop_freezes_within_one_tick() {
    let mut controller = MotionController::with_seed(scenario_config(), Vec::new(), 9);
    controller.start(Pose::default(), &square_waypoints(), &FlatTerrain::new(0.0));

    // Stop at an arbitrary point mid-patrol.
    run_for(&mut controller, 7.3);
    controller.request_immediate_stop();
    assert_eq!(controller.state(), MotionState::Stopped);

    let frozen = controller.pose().position;
    controller.update(FRAME_DT);
    controller.fixed_update(PHYSICS_DT);
    assert_eq!(controller.pose().position, frozen);
}

// ============================================================================
// Graceful stop scenario
// ============================================================================

#[test]
fn graceful_stop_decays_speed_linearly_and_rate_quadratically() {
    let rates = Arc::new(Mutex::new(Vec::new()));
    let mut controller = MotionController::with_seed(
        scenario_config(),
        vec![Box::new(RecordingSink(rates.clone()))],
        5,
    );
    controller.start(Pose::default(), &square_waypoints(), &FlatTerrain::new(0.0));

    run_for(&mut controller, 5.0);
    controller.request_graceful_stop();
    assert!(rates.lock().unwrap().is_empty(), "sinks written while moving");

    // Past the 1s delay: deceleration begins.
    run_for(&mut controller, 1.5);
    assert_eq!(controller.state(), MotionState::Decelerating);

    // Advance the physics clock to the 4s duration's midpoint, then compare
    // the two curves: speed is linear (half gone), animation rate is
    // quadratic ease-out (a quarter gone).
    let elapsed_so_far = controller_decel_elapsed(&rates);
    let mut remaining_to_mid = 2.0 - elapsed_so_far;
    while remaining_to_mid > 0.0 {
        controller.fixed_update(PHYSICS_DT);
        remaining_to_mid -= PHYSICS_DT;
    }

    let mid_rate = *rates.lock().unwrap().last().unwrap();
    assert_relative_eq!(mid_rate, 0.75, epsilon = 0.02);

    // Step once more and infer instantaneous speed from the displacement.
    let before = controller.pose().position;
    controller.fixed_update(PHYSICS_DT);
    let speed = controller.pose().position.distance(&before) / PHYSICS_DT;
    assert_relative_eq!(speed, 2.5, epsilon = 0.1);

    // Run out the rest: Stopped, exactly zero rate.
    run_for(&mut controller, 5.0);
    assert_eq!(controller.state(), MotionState::Stopped);
    assert_eq!(*rates.lock().unwrap().last().unwrap(), 0.0);
}

/// Physics time elapsed since deceleration began, recovered from the sink
/// trace (one write per physics tick).
fn controller_decel_elapsed(rates: &Arc<Mutex<Vec<f32>>>) -> f32 {
    rates.lock().unwrap().len() as f32 * PHYSICS_DT
}

#[test]
fn graceful_stop_travels_straight() {
    let mut controller = MotionController::with_seed(scenario_config(), Vec::new(), 11);
    controller.start(Pose::default(), &square_waypoints(), &FlatTerrain::new(0.0));

    run_for(&mut controller, 3.0);
    controller.request_graceful_stop();
    run_for(&mut controller, 1.5);
    assert_eq!(controller.state(), MotionState::Decelerating);

    let heading = controller.pose().heading;
    let p0 = controller.pose().position;
    run_for(&mut controller, 1.0);
    let p1 = controller.pose().position;
    run_for(&mut controller, 1.0);
    let p2 = controller.pose().position;

    // Heading never changes and the three samples are collinear in XZ.
    assert_eq!(controller.pose().heading, heading);
    let d1 = (p1 - p0).flatten().normalize();
    let d2 = (p2 - p1).flatten().normalize();
    assert!((d1.x - d2.x).abs() < 1e-3 && (d1.z - d2.z).abs() < 1e-3);
}

// ============================================================================
// Construction failure scenario
// ============================================================================

#[test]
fn two_waypoints_never_leave_uninitialized() {
    let mut controller = MotionController::with_seed(scenario_config(), Vec::new(), 2);
    let two = vec![WorldPoint::ZERO, WorldPoint::new(5.0, 0.0, 5.0)];
    controller.start(Pose::default(), &two, &NoTerrain);

    assert_eq!(controller.state(), MotionState::Uninitialized);

    // Ticks, stop requests: nothing moves, nothing panics.
    controller.request_graceful_stop();
    run_for(&mut controller, 3.0);
    assert_eq!(controller.state(), MotionState::Uninitialized);
    assert_eq!(controller.pose().position, WorldPoint::ZERO);
}

#[test]
fn missing_terrain_falls_back_to_flat_height() {
    let config = scenario_config();
    let builder = PathBuilder::new(&config.patrol);
    let path = builder
        .build(&Pose::default(), &square_waypoints(), &NoTerrain)
        .unwrap();

    // height_offset defaults to 1.0; with no ground every point sits there.
    for p in path.points() {
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-4);
    }
}
