//! Terrain height adapter.
//!
//! The path builder projects every constructed point onto the ground by
//! querying this interface; in the host engine the query is a downward ray
//! cast from high altitude against the "ground" layer. Queries happen only
//! during path construction, never during playback.

/// Ground height lookup at an XZ coordinate.
pub trait TerrainQuery {
    /// Ground height at (x, z), or `None` when no ground was found under
    /// the point. A miss triggers the flat-height fallback in the builder.
    fn ground_height(&self, x: f32, z: f32) -> Option<f32>;
}

/// Terrain with a constant ground height everywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatTerrain {
    /// Ground height returned for every query
    pub height: f32,
}

impl FlatTerrain {
    /// Create flat terrain at the given height
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl TerrainQuery for FlatTerrain {
    fn ground_height(&self, _x: f32, _z: f32) -> Option<f32> {
        Some(self.height)
    }
}

/// Terrain that never reports ground, exercising the fallback path.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTerrain;

impl TerrainQuery for NoTerrain {
    fn ground_height(&self, _x: f32, _z: f32) -> Option<f32> {
        None
    }
}
