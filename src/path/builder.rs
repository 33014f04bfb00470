//! Waypoints to smoothed patrol path.

use crate::config::PatrolConfig;
use crate::core::{heading_between, Pose, WorldPoint};
use crate::error::{CharakError, Result};
use crate::geometry::{arc_points, catmull_rom, circumcenter_xz, linear_points};
use crate::terrain::TerrainQuery;

/// Minimum number of waypoints required to build a route.
pub const MIN_WAYPOINTS: usize = 3;

/// Smoothed, terrain-corrected patrol path.
///
/// Points are appended once during construction and read-only afterward;
/// playback never mutates them.
#[derive(Clone, Debug)]
pub struct PatrolPath {
    points: Vec<WorldPoint>,
    looped: bool,
}

impl PatrolPath {
    /// All path points in traversal order.
    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    /// Number of path points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the path holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the route closes back onto its first waypoint.
    pub fn looped(&self) -> bool {
        self.looped
    }

    /// First path point, if any.
    pub fn first(&self) -> Option<&WorldPoint> {
        self.points.first()
    }

    /// Last path point, if any.
    pub fn last(&self) -> Option<&WorldPoint> {
        self.points.last()
    }

    /// Heading at point `i` toward its successor (toward the predecessor's
    /// continuation for the final point). Returns `None` out of bounds or
    /// when the path has fewer than 2 points.
    pub fn heading_at(&self, i: usize) -> Option<f32> {
        if self.points.len() < 2 || i >= self.points.len() {
            return None;
        }
        if i + 1 < self.points.len() {
            Some(heading_between(&self.points[i], &self.points[i + 1]))
        } else {
            Some(heading_between(&self.points[i - 1], &self.points[i]))
        }
    }
}

/// Builds a [`PatrolPath`] from ordered waypoints and a starting pose.
pub struct PathBuilder {
    loop_path: bool,
    height_offset: f32,
    arc_samples: usize,
    smooth_factor: usize,
}

impl PathBuilder {
    /// Create a builder from patrol configuration.
    pub fn new(config: &PatrolConfig) -> Self {
        Self {
            loop_path: config.loop_path,
            height_offset: config.height_offset,
            arc_samples: config.arc_samples,
            smooth_factor: config.smooth_factor,
        }
    }

    /// Build the full smoothed path.
    ///
    /// Fails with [`CharakError::InsufficientWaypoints`] when fewer than
    /// [`MIN_WAYPOINTS`] waypoints are supplied. Degenerate geometry and
    /// missing terrain are not errors; both fall back (straight segments,
    /// flat height).
    pub fn build(
        &self,
        start: &Pose,
        waypoints: &[WorldPoint],
        terrain: &dyn TerrainQuery,
    ) -> Result<PatrolPath> {
        if waypoints.len() < MIN_WAYPOINTS {
            return Err(CharakError::InsufficientWaypoints {
                got: waypoints.len(),
            });
        }

        // Extended points: starting position prepended to the route.
        let mut extended = Vec::with_capacity(waypoints.len() + 1);
        extended.push(start.position);
        extended.extend_from_slice(waypoints);

        let mut full_path = vec![start.position];

        for i in 0..extended.len() - 1 {
            let p1 = extended[i];
            let p2 = extended[i + 1];
            // Lookahead wraps to the first waypoint, keeping the final
            // pre-closure triple curved toward the route start.
            let p3 = if i + 2 < extended.len() {
                extended[i + 2]
            } else {
                extended[1]
            };

            self.append_span(&mut full_path, &p1, &p2, &p3);
            full_path.push(p2);
        }

        if self.loop_path {
            let last = extended[extended.len() - 1];
            let first = extended[1];
            let second = extended[2];
            self.append_span(&mut full_path, &last, &first, &second);
            full_path.push(first);
        }

        self.correct_heights(&mut full_path, terrain);
        let smoothed = self.smooth(full_path);

        tracing::debug!(
            "built patrol path: {} waypoints -> {} points (loop: {})",
            waypoints.len(),
            smoothed.len(),
            self.loop_path
        );

        Ok(PatrolPath {
            points: smoothed,
            looped: self.loop_path,
        })
    }

    /// Append the interior samples for one span: arc when the triple admits
    /// a circumcircle, straight interpolation otherwise.
    fn append_span(
        &self,
        path: &mut Vec<WorldPoint>,
        p1: &WorldPoint,
        p2: &WorldPoint,
        p3: &WorldPoint,
    ) {
        match circumcenter_xz(p1, p2, p3) {
            Some(center) => path.extend(arc_points(p1, p2, &center, self.arc_samples)),
            None => path.extend(linear_points(p1, p2, self.arc_samples)),
        }
    }

    /// Project every point onto the ground, offset upward; flat fallback at
    /// the offset height when no ground is found.
    fn correct_heights(&self, path: &mut [WorldPoint], terrain: &dyn TerrainQuery) {
        for point in path.iter_mut() {
            *point = match terrain.ground_height(point.x, point.z) {
                Some(ground) => point.with_y(ground + self.height_offset),
                None => point.with_y(self.height_offset),
            };
        }
    }

    /// Catmull-Rom resampling over consecutive windows of 4, boundary
    /// neighbors clamped. Paths with fewer than 4 points are returned
    /// unsmoothed; the final original point is appended verbatim so loop
    /// closure stays exact.
    fn smooth(&self, original: Vec<WorldPoint>) -> Vec<WorldPoint> {
        if original.len() < 4 || self.smooth_factor == 0 {
            return original;
        }

        let mut smoothed = Vec::with_capacity((original.len() - 1) * self.smooth_factor + 1);
        for i in 0..original.len() - 1 {
            let p0 = if i == 0 { original[i] } else { original[i - 1] };
            let p1 = original[i];
            let p2 = original[i + 1];
            let p3 = if i + 2 < original.len() {
                original[i + 2]
            } else {
                original[i + 1]
            };

            for j in 0..self.smooth_factor {
                let t = j as f32 / self.smooth_factor as f32;
                smoothed.push(catmull_rom(&p0, &p1, &p2, &p3, t));
            }
        }

        smoothed.push(original[original.len() - 1]);
        smoothed
    }
}
