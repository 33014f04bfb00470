//! Segment playback driven by the per-frame tick.

use crate::core::{angle_delta, normalize_angle, Pose, WorldPoint};

use super::segment::Segment;

/// Plays a segment sequence in order, looping when requested.
///
/// Holds the current segment index and elapsed time; `advance` interpolates
/// position and heading linearly over each segment's duration. Leftover tick
/// time carries across segment boundaries so loop restarts have no gap.
#[derive(Clone, Debug)]
pub struct SegmentPlayback {
    segments: Vec<Segment>,
    looped: bool,
    index: usize,
    elapsed: f32,
    pose: Pose,
    moving: bool,
}

impl SegmentPlayback {
    /// Create playback over a planned segment sequence.
    pub fn new(segments: Vec<Segment>, looped: bool) -> Self {
        // A looping sequence with no playable time would spin forever in
        // `advance`; treat it as idle from the start.
        let total: f32 = segments.iter().map(|s| s.duration.max(0.0)).sum();
        let (pose, moving) = match segments.first() {
            Some(seg) => (seg.start, total > 0.0),
            None => (Pose::default(), false),
        };
        Self {
            segments,
            looped,
            index: 0,
            elapsed: 0.0,
            pose,
            moving,
        }
    }

    /// True while any segment is active.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Pose at the current playback position.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Index of the segment currently playing.
    pub fn current_segment(&self) -> usize {
        self.index
    }

    /// Advance playback by `dt` seconds and return the interpolated pose.
    pub fn advance(&mut self, dt: f32) -> Pose {
        if !self.moving || dt <= 0.0 {
            return self.pose;
        }

        let mut remaining = dt;
        loop {
            let seg = self.segments[self.index];

            if seg.duration <= 0.0 || self.elapsed + remaining >= seg.duration {
                // Segment complete: snap to its end, carry leftover time.
                remaining = (self.elapsed + remaining - seg.duration.max(0.0)).max(0.0);
                self.pose = Pose::new(seg.end, seg.target_heading);
                self.elapsed = 0.0;
                self.index += 1;

                if self.index >= self.segments.len() {
                    if self.looped {
                        self.index = 0;
                    } else {
                        self.moving = false;
                        return self.pose;
                    }
                }
                if remaining == 0.0 {
                    return self.pose;
                }
            } else {
                self.elapsed += remaining;
                let t = self.elapsed / seg.duration;
                self.pose.position = WorldPoint::lerp(seg.start.position, seg.end, t);
                self.pose.heading = normalize_angle(
                    seg.start.heading + angle_delta(seg.start.heading, seg.target_heading) * t,
                );
                return self.pose;
            }
        }
    }

    /// Stop playback immediately, freezing at the current pose. The
    /// in-flight segment is cut, not completed.
    pub fn stop(&mut self) {
        self.moving = false;
    }
}
