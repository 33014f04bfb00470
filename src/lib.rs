//! CharakNav - Patrol path construction and constrained-motion control
//!
//! Builds smoothed patrol routes for large patrolling collectors from a
//! sparse set of waypoints, and drives their motion from external per-frame
//! and fixed-timestep ticks.
//!
//! # Architecture
//!
//! Data flows one way through the layers:
//!
//! ```text
//! waypoints ──► path (circumcircle arcs + terrain projection + Catmull-Rom)
//!                 │
//!                 ▼
//!             playback (turn-rate-constrained timed segments)
//!                 │
//!                 ▼
//!             controller (Moving / Decelerating state machine)
//! ```
//!
//! - [`core`] — world points, poses, angle math
//! - [`geometry`] — circumcenter, arc sampling, Catmull-Rom primitives
//! - [`terrain`] — ground height adapter consumed during construction
//! - [`path`] — waypoints to a smoothed, terrain-corrected point sequence
//! - [`playback`] — timed move+rotate segments and their scheduler
//! - [`controller`] — lifecycle state machine with graceful/immediate stop
//!
//! # Example
//!
//! ```
//! use charak_nav::{CharakConfig, MotionController, MotionState, Pose, WorldPoint};
//! use charak_nav::terrain::FlatTerrain;
//!
//! let waypoints = vec![
//!     WorldPoint::new(10.0, 0.0, 0.0),
//!     WorldPoint::new(10.0, 0.0, 10.0),
//!     WorldPoint::new(0.0, 0.0, 10.0),
//! ];
//!
//! let mut controller = MotionController::new(CharakConfig::default(), Vec::new());
//! controller.start(Pose::default(), &waypoints, &FlatTerrain::new(0.0));
//! assert_eq!(controller.state(), MotionState::Moving);
//!
//! controller.update(1.0 / 60.0);
//! controller.request_graceful_stop();
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod geometry;
pub mod path;
pub mod playback;
pub mod terrain;

pub use config::{CharakConfig, PatrolConfig, StopConfig};
pub use controller::{AnimationRateSink, MotionController, MotionState};
pub use crate::core::{Pose, WorldPoint};
pub use error::{CharakError, Result};
pub use path::{PathBuilder, PatrolPath};
pub use playback::{plan_segments, Segment, SegmentPlayback};
pub use terrain::{FlatTerrain, NoTerrain, TerrainQuery};
