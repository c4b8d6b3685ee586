//! Game state and core simulation types
//!
//! One `GameState` per session; `reset_run` returns it to the start of a run.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::SpawnDirector;
use crate::tuning::RunnerConfig;

/// Height of the player's feet when standing on the track
pub const GROUND_LEVEL: f32 = 0.0;

/// Top-level lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu shown, nothing moves
    Idle,
    /// Active gameplay
    Running,
    /// Run ended by an obstacle; frozen until restart or menu
    GameOver,
}

/// What a spawned entity does when it reaches the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Ends the run on contact unless the player is airborne
    Obstacle,
    /// Coin, collected on contact
    Collectible,
}

/// An obstacle or coin travelling down a lane toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnedEntity {
    pub id: u32,
    pub kind: EntityKind,
    pub lane: u32,
    /// Depth coordinate; starts negative and grows toward the player at 0
    pub z: f32,
    /// Edge length of the entity's box
    pub size: f32,
}

/// Fixed-duration lane change in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneTween {
    pub from: f32,
    pub to: f32,
    pub elapsed: f32,
    pub duration: f32,
}

/// The runner
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Target lane (the tween may still be moving toward it)
    pub lane: u32,
    /// x = lateral, y = height above ground, z = depth (always 0)
    pub position: Vec3,
    pub vertical_velocity: f32,
    pub airborne: bool,
    pub tween: Option<LaneTween>,
}

impl Player {
    /// Standing in the middle lane
    pub fn new(config: &RunnerConfig) -> Self {
        let lane = config.middle_lane();
        Self {
            lane,
            position: Vec3::new(config.lane_center(lane), GROUND_LEVEL, 0.0),
            vertical_velocity: 0.0,
            airborne: false,
            tween: None,
        }
    }
}

/// Notifications for UI and audio, drained after each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    /// Integer part of the score changed
    ScoreChanged { score: u64 },
    CoinsChanged { coins: u32 },
    PickupOccurred { id: u32, lane: u32 },
    CollisionOccurred { id: u32, lane: u32 },
    ObstaclePassed { id: u32 },
    /// A coin scrolled past uncollected
    CollectibleMissed { id: u32 },
    Jumped,
    LaneChanged { lane: u32 },
    /// Raised by the runner after a finished run beats the stored best
    NewBestScore { score: u64 },
}

/// Hand out `*next` and advance the counter
pub(crate) fn alloc_entity_id(next: &mut u32) -> u32 {
    let id = *next;
    *next += 1;
    id
}

/// Complete simulation state (deterministic given seed and dt sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance knobs for this session
    pub config: RunnerConfig,
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Run score; non-decreasing while Running
    pub score: f64,
    pub coins_collected: u32,
    /// Current scroll-speed multiplier (1.0 at run start)
    pub speed_multiplier: f32,
    /// Seconds of Running time in this run
    pub elapsed_time: f32,
    pub player: Player,
    /// Live obstacles and coins, in spawn order
    pub entities: Vec<SpawnedEntity>,
    pub spawner: SpawnDirector,
    /// Pending notifications
    pub events: Vec<GameEvent>,
    pub(crate) next_id: u32,
}

impl GameState {
    /// Create a new idle state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_config(RunnerConfig::default(), seed)
    }

    /// Create a new idle state with the given tuning.
    ///
    /// `config` is taken as-is; callers loading untrusted tuning should run
    /// [`RunnerConfig::validate`] first, as `Runner::new` does.
    pub fn with_config(config: RunnerConfig, seed: u64) -> Self {
        Self {
            player: Player::new(&config),
            spawner: SpawnDirector::new(),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0.0,
            coins_collected: 0,
            speed_multiplier: 1.0,
            elapsed_time: 0.0,
            entities: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        alloc_entity_id(&mut self.next_id)
    }

    /// Current scroll speed in units per second
    pub fn speed(&self) -> f32 {
        self.config.base_speed * self.speed_multiplier
    }

    /// Score as shown to the player and persisted
    pub fn display_score(&self) -> u64 {
        self.score.floor() as u64
    }

    /// Clear run progress, entities and player back to initial values.
    /// The RNG keeps its stream so consecutive runs differ.
    pub fn reset_run(&mut self) {
        self.score = 0.0;
        self.coins_collected = 0;
        self.speed_multiplier = 1.0;
        self.elapsed_time = 0.0;
        self.entities.clear();
        self.spawner.reset();
        self.player = Player::new(&self.config);
    }

    /// Move to a new phase, recording the transition
    pub fn set_phase(&mut self, to: GamePhase) {
        if self.phase == to {
            return;
        }
        let from = self.phase;
        self.phase = to;
        log::info!("Phase {:?} -> {:?}", from, to);
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.player.lane, 1);
        assert_eq!(state.player.position, Vec3::ZERO);
        assert!(state.entities.is_empty());
    }

    #[test]
    fn test_empty_track_does_not_panic() {
        let config = RunnerConfig {
            lane_count: 0,
            ..RunnerConfig::default()
        };
        let state = GameState::with_config(config, 1);
        assert_eq!(state.player.position.x, 0.0);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(7);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_set_phase_records_transition_once() {
        let mut state = GameState::new(7);
        state.set_phase(GamePhase::Running);
        state.set_phase(GamePhase::Running);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PhaseChanged {
                from: GamePhase::Idle,
                to: GamePhase::Running
            }]
        );
        assert!(state.events.is_empty());
    }
}
