//! Patrol path construction.
//!
//! This module turns a sparse ordered waypoint route into a dense,
//! terrain-corrected, spline-smoothed point sequence:
//! - Circumcircle arcs (or linear fallback) between consecutive waypoints
//! - Ground projection with a configurable height offset
//! - Catmull-Rom resampling for the final smoothed path

mod builder;

pub use builder::{PathBuilder, PatrolPath};
