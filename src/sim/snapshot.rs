//! Read-only view of a frame for the renderer and HUD

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, SpawnedEntity};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_position: Vec3,
    pub player_lane: u32,
    pub player_airborne: bool,
    pub lane_count: u32,
    /// Lateral distance between lane centers
    pub lane_spacing: f32,
    /// x of each lane center, indexed by lane
    pub lane_centers: Vec<f32>,
    pub entities: Vec<SpawnedEntity>,
    pub phase: GamePhase,
    pub score: u64,
    pub coins_collected: u32,
    pub speed_multiplier: f32,
    /// Filled in by the runner from persisted data
    pub best_score: u64,
    pub last_score: u64,
    pub skin: usize,
}

impl Snapshot {
    /// Capture simulation state; persisted fields start at zero
    pub fn capture(state: &GameState) -> Self {
        Self {
            player_position: state.player.position,
            player_lane: state.player.lane,
            player_airborne: state.player.airborne,
            lane_count: state.config.lane_count,
            lane_spacing: state.config.lane_spacing,
            lane_centers: (0..state.config.lane_count)
                .map(|lane| state.config.lane_center(lane))
                .collect(),
            entities: state.entities.clone(),
            phase: state.phase,
            score: state.display_score(),
            coins_collected: state.coins_collected,
            speed_multiplier: state.speed_multiplier,
            best_score: 0,
            last_score: 0,
            skin: 0,
        }
    }

    /// x of `lane`'s center; lanes past the track clamp to the last one
    pub fn lane_x(&self, lane: u32) -> f32 {
        let last = self.lane_centers.len().saturating_sub(1);
        self.lane_centers
            .get((lane as usize).min(last))
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_positions_match_tuning() {
        let state = GameState::new(3);
        let snapshot = Snapshot::capture(&state);
        assert_eq!(snapshot.lane_centers.len(), state.config.lane_count as usize);
        for lane in 0..state.config.lane_count {
            assert_eq!(snapshot.lane_x(lane), state.config.lane_center(lane));
        }
        assert_eq!(snapshot.lane_x(99), state.config.lane_center(2));
        assert_eq!(snapshot.lane_spacing, state.config.lane_spacing);
    }
}
