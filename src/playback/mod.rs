//! Timed segment planning and playback.
//!
//! This module converts a smoothed patrol path into move+rotate segments
//! constrained by linear speed and turn rate, and plays them back under an
//! external per-frame tick. Playback is an explicit current-segment index
//! plus elapsed time; no timeline engine involved.

mod scheduler;
mod segment;

pub use scheduler::SegmentPlayback;
pub use segment::{plan_segments, Segment};
