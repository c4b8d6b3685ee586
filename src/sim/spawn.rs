//! Procedural obstacle/coin spawning
//!
//! One entity per elapsed spawn interval. The interval shrinks with run time
//! down to a floor; kind, lane and size come from the injected RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{EntityKind, SpawnedEntity};
use crate::tuning::RunnerConfig;

/// Spawn timer for the current run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnDirector {
    /// Seconds since the last spawn
    pub timer: f32,
    /// Spawns suppressed when false (menus, scripted sequences, tests)
    pub enabled: bool,
    /// Entities emitted this run
    pub spawned: u32,
}

impl Default for SpawnDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnDirector {
    pub fn new() -> Self {
        Self {
            timer: 0.0,
            enabled: true,
            spawned: 0,
        }
    }

    /// Start-of-run timer state; `enabled` is left as the host set it
    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.spawned = 0;
    }

    /// Seconds between spawns after `elapsed` seconds of running
    pub fn spawn_interval(config: &RunnerConfig, elapsed: f32) -> f32 {
        (config.base_spawn_interval - elapsed * config.spawn_interval_decay)
            .max(config.min_spawn_interval)
    }

    /// Accumulate `dt` and emit at most one entity when the interval elapses.
    /// `id` is only called when something spawns.
    pub fn tick<R: Rng>(
        &mut self,
        dt: f32,
        elapsed: f32,
        config: &RunnerConfig,
        rng: &mut R,
        id: impl FnOnce() -> u32,
    ) -> Option<SpawnedEntity> {
        if !self.enabled {
            return None;
        }

        self.timer += dt.max(0.0);
        if self.timer <= Self::spawn_interval(config, elapsed) {
            return None;
        }
        self.timer = 0.0;
        self.spawned += 1;

        let entity = roll_entity(config, rng, id());
        log::debug!(
            "Spawned {:?} #{} in lane {} (size {:.2})",
            entity.kind,
            entity.id,
            entity.lane,
            entity.size
        );
        Some(entity)
    }
}

/// Draw kind, lane and size for a new entity at the far end of the track
pub fn roll_entity<R: Rng>(config: &RunnerConfig, rng: &mut R, id: u32) -> SpawnedEntity {
    let kind = if rng.random::<f32>() < config.collectible_weight {
        EntityKind::Collectible
    } else {
        EntityKind::Obstacle
    };

    let lane = rng.random_range(0..config.lane_count);

    let size = match kind {
        EntityKind::Obstacle => {
            if config.obstacle_size_max > config.obstacle_size_min {
                rng.random_range(config.obstacle_size_min..=config.obstacle_size_max)
            } else {
                config.obstacle_size_min
            }
        }
        EntityKind::Collectible => config.collectible_size,
    };

    SpawnedEntity {
        id,
        kind,
        lane,
        z: -config.spawn_distance,
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_interval_decays_to_floor() {
        let config = RunnerConfig::default();
        let start = SpawnDirector::spawn_interval(&config, 0.0);
        let later = SpawnDirector::spawn_interval(&config, 30.0);
        let much_later = SpawnDirector::spawn_interval(&config, 10_000.0);

        assert_eq!(start, config.base_spawn_interval);
        assert!(later < start);
        assert_eq!(much_later, config.min_spawn_interval);
    }

    #[test]
    fn test_spawns_once_per_interval() {
        let config = RunnerConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut director = SpawnDirector::new();
        let mut next = 0;

        let mut count = 0;
        // 1.1s interval at 10ms steps
        for _ in 0..300 {
            if director
                .tick(0.01, 0.0, &config, &mut rng, || {
                    next += 1;
                    next
                })
                .is_some()
            {
                count += 1;
                assert_eq!(director.timer, 0.0);
            }
        }
        assert_eq!(count, 2);
        assert_eq!(director.spawned, 2);
        assert_eq!(next, 2);
    }

    #[test]
    fn test_disabled_director_never_spawns() {
        let config = RunnerConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut director = SpawnDirector::new();
        director.enabled = false;

        for _ in 0..1000 {
            assert!(director.tick(0.05, 0.0, &config, &mut rng, || 1).is_none());
        }
        assert_eq!(director.timer, 0.0);
    }

    #[test]
    fn test_rolled_entities_respect_config() {
        let config = RunnerConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut coins = 0;

        for id in 0..2000 {
            let entity = roll_entity(&config, &mut rng, id);
            assert!(entity.lane < config.lane_count);
            assert_eq!(entity.z, -config.spawn_distance);
            match entity.kind {
                EntityKind::Obstacle => {
                    assert!(entity.size >= config.obstacle_size_min);
                    assert!(entity.size <= config.obstacle_size_max);
                }
                EntityKind::Collectible => {
                    coins += 1;
                    assert_eq!(entity.size, config.collectible_size);
                }
            }
        }

        // ~28% collectibles
        assert!((400..720).contains(&coins), "coins = {}", coins);
    }

    #[test]
    fn test_weights_at_extremes() {
        let mut rng = Pcg32::seed_from_u64(3);
        let all_coins = RunnerConfig {
            collectible_weight: 1.0,
            ..RunnerConfig::default()
        };
        let no_coins = RunnerConfig {
            collectible_weight: 0.0,
            ..RunnerConfig::default()
        };
        for id in 0..100 {
            assert_eq!(roll_entity(&all_coins, &mut rng, id).kind, EntityKind::Collectible);
            assert_eq!(roll_entity(&no_coins, &mut rng, id).kind, EntityKind::Obstacle);
        }
    }
}
