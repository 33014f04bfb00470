//! Foundation types: world points, poses, angle math.

mod angle;
mod point;

pub use angle::{angle_delta, angle_delta_deg, heading_between, normalize_angle};
pub use point::{Pose, WorldPoint};
