//! Point and pose types for patrol paths.
//!
//! Coordinates are Y-up: path geometry lives in the XZ plane and the Y
//! component carries the terrain-corrected height.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// World coordinates (world units, f32), Y-up.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate (horizontal)
    pub x: f32,
    /// Y coordinate (height above terrain datum)
    pub y: f32,
    /// Z coordinate (horizontal)
    pub z: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance in the horizontal XZ plane (height ignored)
    #[inline]
    pub fn distance_xz(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Length (magnitude) of this point as a vector from origin
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalize to unit length
    #[inline]
    pub fn normalize(&self) -> WorldPoint {
        let len = self.length();
        if len > 0.0 {
            WorldPoint::new(self.x / len, self.y / len, self.z / len)
        } else {
            *self
        }
    }

    /// Linear interpolation between two points
    #[inline]
    pub fn lerp(a: WorldPoint, b: WorldPoint, t: f32) -> WorldPoint {
        a + (b - a) * t
    }

    /// Copy with the height component replaced
    #[inline]
    pub fn with_y(&self, y: f32) -> WorldPoint {
        WorldPoint::new(self.x, y, self.z)
    }

    /// Projection onto the XZ plane (height dropped to zero)
    #[inline]
    pub fn flatten(&self) -> WorldPoint {
        WorldPoint::new(self.x, 0.0, self.z)
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        WorldPoint::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// Position plus yaw heading in the XZ plane.
///
/// Heading 0 faces +Z; positive headings rotate toward +X.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// World position
    pub position: WorldPoint,
    /// Yaw in radians
    pub heading: f32,
}

impl Pose {
    /// Create a new pose
    #[inline]
    pub fn new(position: WorldPoint, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Unit forward vector in the XZ plane for this heading
    #[inline]
    pub fn forward(&self) -> WorldPoint {
        WorldPoint::new(self.heading.sin(), 0.0, self.heading.cos())
    }
}
