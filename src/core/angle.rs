//! Angle helpers shared by the geometry and playback layers.

use std::f32::consts::PI;

use super::point::WorldPoint;

/// Normalize angle to [-π, π]
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle;
    while a > PI {
        a -= 2.0 * PI;
    }
    while a < -PI {
        a += 2.0 * PI;
    }
    a
}

/// Shortest signed delta from `from` to `to` in radians, in [-π, π]
#[inline]
pub fn angle_delta(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}

/// Shortest signed delta from `from` to `to` in degrees, in [-180, 180]
#[inline]
pub fn angle_delta_deg(from: f32, to: f32) -> f32 {
    angle_delta(from.to_radians(), to.to_radians()).to_degrees()
}

/// Yaw heading (radians) from `a` toward `b` in the XZ plane.
///
/// Heading 0 faces +Z, matching [`crate::core::Pose`].
#[inline]
pub fn heading_between(a: &WorldPoint, b: &WorldPoint) -> f32 {
    (b.x - a.x).atan2(b.z - a.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalize_wraps() {
        assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-5);
        assert!((normalize_angle(-3.0 * PI) + PI).abs() < 1e-5);
        assert!((normalize_angle(0.1) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_delta_takes_short_way() {
        // 350° -> 10° is +20°, not -340°
        let d = angle_delta(350.0_f32.to_radians(), 10.0_f32.to_radians());
        assert!((d - 20.0_f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_delta_deg() {
        assert!((angle_delta_deg(0.0, 90.0) - 90.0).abs() < 1e-4);
        assert!((angle_delta_deg(170.0, -170.0) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_heading_between() {
        let o = WorldPoint::ZERO;
        let plus_z = WorldPoint::new(0.0, 0.0, 1.0);
        let plus_x = WorldPoint::new(1.0, 0.0, 0.0);
        assert!(heading_between(&o, &plus_z).abs() < 1e-6);
        assert!((heading_between(&o, &plus_x) - FRAC_PI_2).abs() < 1e-6);
    }
}
