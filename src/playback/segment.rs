//! Segment planning: path points to timed move+rotate units.

use crate::core::{angle_delta_deg, heading_between, Pose, WorldPoint};
use crate::path::PatrolPath;

/// One timed move+rotate unit between two adjacent path points.
///
/// Position and heading interpolate linearly and concurrently over
/// `duration`.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    /// Pose at segment start
    pub start: Pose,
    /// Position at segment end
    pub end: WorldPoint,
    /// Heading at segment end, radians
    pub target_heading: f32,
    /// Segment duration in seconds
    pub duration: f32,
}

/// Plan the timed segment sequence for a patrol path.
///
/// Per consecutive pair: base duration is distance/speed; the target heading
/// looks one point ahead so the collector turns toward where the path is
/// going. The final segment faces the first path point in loop mode and
/// holds the previous heading otherwise. When the required turn exceeds
/// `turn_rate` (degrees per unit distance) times the distance, the segment
/// is stretched to `(angle / turn_rate) / speed` instead of snapping.
pub fn plan_segments(path: &PatrolPath, start_heading: f32, speed: f32, turn_rate: f32) -> Vec<Segment> {
    let points = path.points();
    if points.len() < 2 || speed <= 0.0 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(points.len() - 1);
    let mut current_pos = points[0];
    let mut current_heading = start_heading;

    for i in 1..points.len() {
        let next = points[i];
        let dist = current_pos.distance(&next);
        if dist == 0.0 {
            continue;
        }
        let move_time = dist / speed;

        let target_heading = if i + 1 < points.len() {
            heading_between(&points[i], &points[i + 1])
        } else if path.looped() {
            heading_between(&next, &points[1])
        } else {
            current_heading
        };

        let angle = angle_delta_deg(
            current_heading.to_degrees(),
            target_heading.to_degrees(),
        )
        .abs();
        let max_angle_for_dist = turn_rate * dist;

        let duration = if angle > max_angle_for_dist && turn_rate > 0.0 {
            (angle / turn_rate) / speed
        } else {
            move_time
        };

        segments.push(Segment {
            start: Pose::new(current_pos, current_heading),
            end: next,
            target_heading,
            duration,
        });

        current_pos = next;
        current_heading = target_heading;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatrolConfig;
    use crate::path::PathBuilder;
    use crate::terrain::NoTerrain;
    use std::f32::consts::PI;

    fn open_line_path() -> PatrolPath {
        // Straight line, no smoothing surprises: all circumcenters are
        // degenerate so every span falls back to linear interpolation.
        let builder = PathBuilder::new(&PatrolConfig {
            loop_path: false,
            smooth_factor: 0,
            ..PatrolConfig::default()
        });
        let waypoints = vec![
            WorldPoint::new(0.0, 0.0, 10.0),
            WorldPoint::new(0.0, 0.0, 20.0),
            WorldPoint::new(0.0, 0.0, 30.0),
        ];
        builder
            .build(&Pose::default(), &waypoints, &NoTerrain)
            .unwrap()
    }

    #[test]
    fn test_straight_path_durations_match_speed() {
        let path = open_line_path();
        let segments = plan_segments(&path, 0.0, 5.0, 90.0);
        assert!(!segments.is_empty());

        for seg in &segments {
            let dist = seg.start.position.distance(&seg.end);
            assert!((seg.duration - dist / 5.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_turn_limited_segment_is_slower() {
        let path = open_line_path();
        // Start facing backward (-Z): the first segment must turn 180°.
        let turn_rate = 10.0; // degrees per unit distance
        let segments = plan_segments(&path, PI, 5.0, turn_rate);

        let first = &segments[0];
        let dist = first.start.position.distance(&first.end);
        let base = dist / 5.0;
        assert!(
            first.duration > base,
            "turn-limited duration {} should exceed {}",
            first.duration,
            base
        );
        // Exactly (angle / turn_rate) / speed
        assert!((first.duration - (180.0 / turn_rate) / 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_headings_look_ahead() {
        let path = open_line_path();
        let segments = plan_segments(&path, 0.0, 5.0, 90.0);

        // Straight +Z path: every lookahead heading is 0.
        for seg in &segments {
            assert!(seg.target_heading.abs() < 1e-4);
        }
    }

    #[test]
    fn test_open_path_final_heading_holds() {
        let path = open_line_path();
        let start_heading = 0.3;
        let segments = plan_segments(&path, start_heading, 5.0, 10_000.0);

        // With an effectively unlimited turn rate the first segment turns to
        // the lookahead heading (0.0); the final segment holds whatever the
        // previous target was.
        let last = segments.last().unwrap();
        let prev = &segments[segments.len() - 2];
        assert!((last.target_heading - prev.target_heading).abs() < 1e-5);
    }

    #[test]
    fn test_zero_speed_plans_nothing() {
        let builder = PathBuilder::new(&PatrolConfig::default());
        let waypoints = vec![
            WorldPoint::new(1.0, 0.0, 0.0),
            WorldPoint::new(2.0, 0.0, 1.0),
            WorldPoint::new(3.0, 0.0, 0.0),
        ];
        let path = builder
            .build(&Pose::default(), &waypoints, &NoTerrain)
            .unwrap();
        assert!(plan_segments(&path, 0.0, 0.0, 90.0).is_empty());
    }
}
