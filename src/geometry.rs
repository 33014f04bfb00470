//! Circumcircle and spline primitives for patrol path construction.
//!
//! All functions here are pure and operate in the horizontal XZ plane;
//! heights are reconstructed later by terrain projection.

use crate::core::{normalize_angle, WorldPoint};

/// Divisor padding used by [`circumcenter_xz`] to sidestep near-vertical
/// chords without branching. This is a deliberate approximation carried by
/// the whole path pipeline: centers computed near a vertical chord carry a
/// small radius error, which the arc sampler tolerates by interpolating the
/// radius between its endpoints.
pub const CHORD_EPS: f32 = 1e-4;

/// Circumcenter of three points projected onto the XZ plane.
///
/// Fits the perpendicular bisectors of chords (p1,p2) and (p2,p3) and
/// intersects them. Returns `None` when the chord slopes agree within
/// [`CHORD_EPS`] (collinear points) or when the intersection degenerates to
/// a non-finite coordinate; either way the caller falls back to a straight
/// segment.
pub fn circumcenter_xz(p1: &WorldPoint, p2: &WorldPoint, p3: &WorldPoint) -> Option<WorldPoint> {
    let (x1, z1) = (p1.x, p1.z);
    let (x2, z2) = (p2.x, p2.z);
    let (x3, z3) = (p3.x, p3.z);

    let ma = (z2 - z1) / (x2 - x1 + CHORD_EPS);
    let mb = (z3 - z2) / (x3 - x2 + CHORD_EPS);
    if (ma - mb).abs() < CHORD_EPS {
        return None;
    }

    let center_x =
        (ma * mb * (z1 - z3) + mb * (x1 + x2) - ma * (x2 + x3)) / (2.0 * (mb - ma));
    let center_z = (-1.0 / ma) * (center_x - (x1 + x2) / 2.0) + (z1 + z2) / 2.0;

    if !center_x.is_finite() || !center_z.is_finite() {
        return None;
    }
    Some(WorldPoint::new(center_x, 0.0, center_z))
}

/// Sample `count` interior points along the arc from `start` to `end` around
/// `center`, exclusive of both endpoints.
///
/// The angle sweeps the shortest signed delta between the endpoint angles and
/// the radius is interpolated between the endpoint radii, so slightly
/// inconsistent centers still yield a continuous arc. Heights are zero;
/// terrain projection assigns them later.
pub fn arc_points(
    start: &WorldPoint,
    end: &WorldPoint,
    center: &WorldPoint,
    count: usize,
) -> Vec<WorldPoint> {
    let vec_s = (*start - *center).flatten();
    let vec_e = (*end - *center).flatten();

    let rad_s = vec_s.length();
    let rad_e = vec_e.length();

    let angle_s = vec_s.z.atan2(vec_s.x);
    let angle_e = vec_e.z.atan2(vec_e.x);
    let angle_diff = normalize_angle(angle_e - angle_s);

    let mut points = Vec::with_capacity(count);
    for j in 1..=count {
        let t = j as f32 / (count + 1) as f32;
        let angle = angle_s + t * angle_diff;
        let rad = rad_s + (rad_e - rad_s) * t;
        points.push(WorldPoint::new(
            center.x + angle.cos() * rad,
            0.0,
            center.z + angle.sin() * rad,
        ));
    }
    points
}

/// Sample `count` interior points on the straight line from `start` to `end`,
/// exclusive of both endpoints. Fallback for degenerate circumcircles.
pub fn linear_points(start: &WorldPoint, end: &WorldPoint, count: usize) -> Vec<WorldPoint> {
    let mut points = Vec::with_capacity(count);
    for j in 1..=count {
        let t = j as f32 / (count + 1) as f32;
        points.push(WorldPoint::lerp(*start, *end, t));
    }
    points
}

/// Uniform-parameterization Catmull-Rom interpolation between `p1` and `p2`
/// at parameter `t` in [0, 1], with `p0`/`p3` as tangent neighbors.
pub fn catmull_rom(
    p0: &WorldPoint,
    p1: &WorldPoint,
    p2: &WorldPoint,
    p3: &WorldPoint,
    t: f32,
) -> WorldPoint {
    let t2 = t * t;
    let t3 = t2 * t;

    ((*p1 * 2.0)
        + (*p2 - *p0) * t
        + ((*p0 * 2.0) - (*p1 * 5.0) + (*p2 * 4.0) - *p3) * t2
        + ((*p1 * 3.0) - *p0 - (*p2 * 3.0) + *p3) * t3)
        * 0.5
}
