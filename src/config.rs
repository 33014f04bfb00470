//! Configuration loading for charak-nav

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CharakConfig {
    #[serde(default)]
    pub patrol: PatrolConfig,
    #[serde(default)]
    pub stop: StopConfig,
}

/// Patrol route and motion parameters
#[derive(Clone, Debug, Deserialize)]
pub struct PatrolConfig {
    /// Close the route back to the first waypoint (default: true)
    #[serde(default = "default_loop_path")]
    pub loop_path: bool,

    /// Linear speed in world units per second (default: 5.0)
    #[serde(default = "default_speed")]
    pub speed: f32,

    /// Height offset above the ground hit, and the flat fallback height
    /// when no ground is found (default: 1.0)
    #[serde(default = "default_height_offset")]
    pub height_offset: f32,

    /// Turn rate in degrees per world unit of travel (default: 90.0)
    #[serde(default = "default_turn_rate")]
    pub turn_rate: f32,

    /// Interior samples per arc or linear span (default: 5)
    #[serde(default = "default_arc_samples")]
    pub arc_samples: usize,

    /// Catmull-Rom resamples per path span (default: 10)
    #[serde(default = "default_smooth_factor")]
    pub smooth_factor: usize,
}

/// Graceful-stop timing parameters
#[derive(Clone, Debug, Deserialize)]
pub struct StopConfig {
    /// Minimum delay before deceleration begins, seconds (default: 0.5)
    #[serde(default = "default_delay_min")]
    pub delay_min: f32,

    /// Maximum delay before deceleration begins, seconds (default: 1.5)
    #[serde(default = "default_delay_max")]
    pub delay_max: f32,

    /// Minimum deceleration duration, seconds (default: 5.0)
    #[serde(default = "default_decel_min")]
    pub decel_min: f32,

    /// Maximum deceleration duration, seconds (default: 11.0)
    #[serde(default = "default_decel_max")]
    pub decel_max: f32,
}

fn default_loop_path() -> bool {
    true
}

fn default_speed() -> f32 {
    5.0
}

fn default_height_offset() -> f32 {
    1.0
}

fn default_turn_rate() -> f32 {
    90.0
}

fn default_arc_samples() -> usize {
    5
}

fn default_smooth_factor() -> usize {
    10
}

fn default_delay_min() -> f32 {
    0.5
}

fn default_delay_max() -> f32 {
    1.5
}

fn default_decel_min() -> f32 {
    5.0
}

fn default_decel_max() -> f32 {
    11.0
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            loop_path: default_loop_path(),
            speed: default_speed(),
            height_offset: default_height_offset(),
            turn_rate: default_turn_rate(),
            arc_samples: default_arc_samples(),
            smooth_factor: default_smooth_factor(),
        }
    }
}

impl Default for StopConfig {
    fn default() -> Self {
        Self {
            delay_min: default_delay_min(),
            delay_max: default_delay_max(),
            decel_min: default_decel_min(),
            decel_max: default_decel_max(),
        }
    }
}

impl CharakConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CharakConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
