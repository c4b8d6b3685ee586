//! Coarse collision detection
//!
//! Everything is an axis-aligned box projected onto the lane (x) / depth (z)
//! plane. Height only matters through the airborne flag, handled by the tick.

use glam::Vec2;

use super::state::{Player, SpawnedEntity};
use crate::tuning::RunnerConfig;

/// Axis-aligned box in the x/z plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    /// Square box of edge `size` centered at (x, z)
    pub fn square(x: f32, z: f32, size: f32) -> Self {
        Self {
            center: Vec2::new(x, z),
            half_extents: Vec2::splat(size / 2.0),
        }
    }

    /// Overlap test; `margin` shrinks both boxes per side before testing
    pub fn overlaps(&self, other: &Aabb, margin: f32) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents - Vec2::splat(2.0 * margin);
        delta.x < reach.x && delta.y < reach.y
    }
}

/// Player footprint at its live (possibly mid-tween) position
pub fn player_box(player: &Player, config: &RunnerConfig) -> Aabb {
    Aabb::square(player.position.x, player.position.z, config.player_size)
}

/// Entity footprint centered on its lane
pub fn entity_box(entity: &SpawnedEntity, config: &RunnerConfig) -> Aabb {
    Aabb::square(config.lane_center(entity.lane), entity.z, entity.size)
}

/// Whether the entity's footprint touches the player's
pub fn touches_player(player: &Player, entity: &SpawnedEntity, config: &RunnerConfig) -> bool {
    player_box(player, config).overlaps(&entity_box(entity, config), config.collision_margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EntityKind;

    fn obstacle(lane: u32, z: f32) -> SpawnedEntity {
        SpawnedEntity {
            id: 1,
            kind: EntityKind::Obstacle,
            lane,
            z,
            size: 1.0,
        }
    }

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::square(0.0, 0.0, 1.0);
        assert!(a.overlaps(&Aabb::square(0.5, 0.5, 1.0), 0.0));
        assert!(!a.overlaps(&Aabb::square(1.5, 0.0, 1.0), 0.0));
        // Touching edges do not count
        assert!(!a.overlaps(&Aabb::square(1.0, 0.0, 1.0), 0.0));
    }

    #[test]
    fn test_margin_forgives_grazes() {
        let a = Aabb::square(0.0, 0.0, 1.0);
        let b = Aabb::square(0.0, 0.95, 1.0);
        assert!(a.overlaps(&b, 0.0));
        assert!(!a.overlaps(&b, 0.05));
    }

    #[test]
    fn test_same_lane_hits_other_lane_misses() {
        let config = RunnerConfig::default();
        let player = Player::new(&config);

        assert!(touches_player(&player, &obstacle(1, -0.3), &config));
        assert!(!touches_player(&player, &obstacle(0, -0.3), &config));
        assert!(!touches_player(&player, &obstacle(2, -0.3), &config));
        assert!(!touches_player(&player, &obstacle(1, -5.0), &config));
    }

    #[test]
    fn test_mid_tween_position_is_used() {
        let config = RunnerConfig::default();
        let mut player = Player::new(&config);
        // Halfway between lane 1 and lane 2
        player.position.x = 1.0;

        assert!(!touches_player(&player, &obstacle(1, 0.0), &config));
        assert!(!touches_player(&player, &obstacle(2, 0.0), &config));
        player.position.x = 1.5;
        assert!(touches_player(&player, &obstacle(2, 0.0), &config));
    }
}
