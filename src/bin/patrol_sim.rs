//! Patrol simulation driver.
//!
//! Runs one collector around a square patrol route on flat terrain, issues
//! a graceful stop partway through, and logs the trajectory summary. Useful
//! for eyeballing path construction and the stop state machine without a
//! host engine.
//!
//! Usage: `patrol_sim [config.toml]`

use std::path::Path;

use tracing::info;

use charak_nav::terrain::FlatTerrain;
use charak_nav::{CharakConfig, MotionController, MotionState, Pose, WorldPoint};

const FRAME_DT: f32 = 1.0 / 60.0;
const PHYSICS_DT: f32 = 1.0 / 50.0;

fn main() -> charak_nav::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("charak_nav=info".parse().unwrap())
                .add_directive("patrol_sim=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = if let Some(path) = args.get(1) {
        info!("Loading configuration from {}", path);
        CharakConfig::load(Path::new(path))?
    } else {
        info!("Using default configuration");
        CharakConfig::default()
    };

    info!("CharakNav v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "patrol: speed={} turn_rate={}°/unit loop={}",
        config.patrol.speed, config.patrol.turn_rate, config.patrol.loop_path
    );

    let waypoints = vec![
        WorldPoint::new(20.0, 0.0, 0.0),
        WorldPoint::new(20.0, 0.0, 20.0),
        WorldPoint::new(0.0, 0.0, 20.0),
        WorldPoint::new(0.0, 0.0, 0.0),
    ];
    let terrain = FlatTerrain::new(0.0);

    let mut controller = MotionController::new(config, Vec::new());
    controller.start(Pose::default(), &waypoints, &terrain);
    if controller.state() != MotionState::Moving {
        info!("no patrol started, exiting");
        return Ok(());
    }

    // 30 seconds of patrol, then a graceful stop, then run to standstill.
    let mut sim_time = 0.0_f32;
    let mut physics_accum = 0.0_f32;
    let mut stop_requested = false;
    let mut travelled = 0.0_f32;
    let mut last_pos = controller.pose().position;

    while controller.state() != MotionState::Stopped && sim_time < 120.0 {
        controller.update(FRAME_DT);

        physics_accum += FRAME_DT;
        while physics_accum >= PHYSICS_DT {
            controller.fixed_update(PHYSICS_DT);
            physics_accum -= PHYSICS_DT;
        }

        let pos = controller.pose().position;
        travelled += pos.distance(&last_pos);
        last_pos = pos;
        sim_time += FRAME_DT;

        if sim_time >= 30.0 && !stop_requested {
            info!("requesting graceful stop at t={:.1}s", sim_time);
            controller.request_graceful_stop();
            stop_requested = true;
        }
    }

    let final_pose = controller.pose();
    info!(
        "simulation done: t={:.1}s, travelled {:.1} units, final pos ({:.2}, {:.2}, {:.2}), state {:?}",
        sim_time,
        travelled,
        final_pose.position.x,
        final_pose.position.y,
        final_pose.position.z,
        controller.state()
    );

    Ok(())
}
