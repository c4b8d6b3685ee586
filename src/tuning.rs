//! Data-driven game balance
//!
//! Every gameplay constant lives in [`RunnerConfig`]. Defaults reproduce the
//! shipped feel; a host can override any subset from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MAX_FRAME_DT;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tuning value: {0}")]
    Invalid(String),
}

/// Balance knobs for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    // === Track ===
    /// Number of lanes (original game: 3)
    pub lane_count: u32,
    /// Lateral distance between adjacent lane centers
    pub lane_spacing: f32,
    /// Depth at which new entities appear (distance ahead of the player)
    pub spawn_distance: f32,
    /// Entities whose depth exceeds this have been passed and are removed
    pub despawn_z: f32,

    // === Player ===
    /// Player box width (lateral) and depth
    pub player_size: f32,
    /// Lane tween duration in seconds
    pub lane_tween_duration: f32,
    /// Initial upward velocity on jump (units/s)
    pub jump_impulse: f32,
    /// Vertical acceleration (negative = downward, units/s²)
    pub gravity: f32,
    /// Shrinks both hitboxes by this much per side (forgiving collisions)
    pub collision_margin: f32,

    // === Speed / score ===
    /// Scroll speed at multiplier 1.0 (units/s)
    pub base_speed: f32,
    /// Multiplier growth per second of run time
    pub speed_ramp: f32,
    /// Upper bound for the speed multiplier
    pub max_speed_multiplier: f32,
    /// Points per unit of distance travelled
    pub distance_score_rate: f64,
    /// Points for collecting a coin
    pub pickup_bonus: f64,
    /// Points for an obstacle scrolling safely past
    pub pass_bonus: f64,

    // === Spawning ===
    /// Seconds between spawns at the start of a run
    pub base_spawn_interval: f32,
    /// Floor for the spawn interval
    pub min_spawn_interval: f32,
    /// Interval reduction per second of run time
    pub spawn_interval_decay: f32,
    /// Probability that a spawn is a collectible (obstacle = 1 - this)
    pub collectible_weight: f32,
    /// Obstacle edge length range
    pub obstacle_size_min: f32,
    pub obstacle_size_max: f32,
    /// Collectible edge length
    pub collectible_size: f32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            lane_count: 3,
            lane_spacing: 2.0,
            spawn_distance: 40.0,
            despawn_z: 2.0,

            player_size: 1.0,
            lane_tween_duration: 0.12,
            // 0.5s airtime, 1.125 peak height
            jump_impulse: 9.0,
            gravity: -36.0,
            collision_margin: 0.05,

            base_speed: 9.0,
            speed_ramp: 0.02,
            max_speed_multiplier: 2.8,
            distance_score_rate: 1.0,
            pickup_bonus: 50.0,
            pass_bonus: 5.0,

            base_spawn_interval: 1.1,
            min_spawn_interval: 0.35,
            spawn_interval_decay: 0.01,
            collectible_weight: 0.28,
            obstacle_size_min: 0.8,
            obstacle_size_max: 1.2,
            collectible_size: 0.8,
        }
    }
}

impl RunnerConfig {
    /// Parse a (possibly partial) tuning file and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the simulation degenerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.lane_count == 0 {
            return invalid("lane_count must be at least 1");
        }
        if self.lane_tween_duration <= 0.0 {
            return invalid("lane_tween_duration must be positive");
        }
        if self.jump_impulse <= 0.0 || self.gravity >= 0.0 {
            return invalid("jump needs a positive impulse and negative gravity");
        }
        if self.base_speed <= 0.0 || self.max_speed_multiplier < 1.0 || self.speed_ramp < 0.0 {
            return invalid("speed must be positive and non-decreasing");
        }
        if !(0.0..=1.0).contains(&self.collectible_weight) {
            return invalid("collectible_weight must be within [0, 1]");
        }
        if self.min_spawn_interval <= 0.0 || self.min_spawn_interval > self.base_spawn_interval {
            return invalid("min_spawn_interval must be positive and <= base_spawn_interval");
        }
        if self.spawn_interval_decay < 0.0 {
            return invalid("spawn_interval_decay must not be negative");
        }
        if self.obstacle_size_min <= 0.0 || self.obstacle_size_min > self.obstacle_size_max {
            return invalid("obstacle size range must be positive and ordered");
        }
        if self.collectible_size <= 0.0 || self.player_size <= 0.0 {
            return invalid("entity sizes must be positive");
        }
        if self.despawn_z <= 0.0 || self.spawn_distance <= 0.0 {
            return invalid("spawn and despawn depths must be positive");
        }
        if self.max_frame_travel() >= self.min_overlap_window() {
            return invalid("top speed lets entities skip past the player in one frame");
        }
        Ok(())
    }

    /// Index of the lane the player starts in
    #[inline]
    pub fn middle_lane(&self) -> u32 {
        self.lane_count / 2
    }

    /// Lateral coordinate of a lane center (middle lane sits at x = 0)
    #[inline]
    pub fn lane_center(&self, lane: u32) -> f32 {
        (lane as f32 - self.lane_count.saturating_sub(1) as f32 / 2.0) * self.lane_spacing
    }

    /// Farthest an entity scrolls in one clamped frame at the speed cap
    pub fn max_frame_travel(&self) -> f32 {
        self.base_speed * self.max_speed_multiplier * MAX_FRAME_DT
    }

    /// Depth range over which the smallest entity overlaps the player
    pub fn min_overlap_window(&self) -> f32 {
        let smallest = self.collectible_size.min(self.obstacle_size_min);
        self.player_size + smallest - 2.0 * self.collision_margin
    }

    /// Highest point of a full jump
    pub fn peak_jump_height(&self) -> f32 {
        self.jump_impulse * self.jump_impulse / (2.0 * -self.gravity)
    }

    /// Time from take-off to landing for a full jump
    pub fn jump_airtime(&self) -> f32 {
        2.0 * self.jump_impulse / -self.gravity
    }
}
