//! Player intents and the per-frame intent queue
//!
//! Raw input (keys, buttons) is translated into [`Intent`]s as it arrives and
//! queued; the runner drains the queue once at the top of each frame so input
//! timing never interleaves with a tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{restart_run, show_menu, start_run};

/// Discrete request from the input source or UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    /// Jump to an explicit lane; out-of-range values are clamped
    SetLane(i64),
    /// Jump while running, otherwise start/restart
    Jump,
    /// Same phase-dependent behaviour as `Jump` (Enter/tap)
    StartOrRestart,
    /// Start button on the menu
    Start,
    /// Restart button on the game-over screen
    Restart,
    /// Back to the menu from game over
    ShowMenu,
    /// Preference intents, handled outside the simulation
    ToggleSound,
    SelectSkin(i64),
}

/// FIFO of intents waiting for the next frame
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pending: VecDeque<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Remove and yield every queued intent in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Intent> + '_ {
        self.pending.drain(..)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Apply one gameplay intent to the simulation.
///
/// Intents that make no sense in the current phase are ignored. Preference
/// intents (`ToggleSound`, `SelectSkin`) are not simulation concerns and are
/// ignored here.
pub fn apply_intent(state: &mut GameState, intent: Intent) {
    match (intent, state.phase) {
        (Intent::MoveLeft, GamePhase::Running) => shift(state, -1),
        (Intent::MoveRight, GamePhase::Running) => shift(state, 1),
        (Intent::SetLane(lane), GamePhase::Running) => {
            if state.player.set_lane(lane, &state.config) {
                state.events.push(GameEvent::LaneChanged {
                    lane: state.player.lane,
                });
            }
        }

        (Intent::Jump | Intent::StartOrRestart, GamePhase::Running) => {
            if state.player.jump(&state.config) {
                state.events.push(GameEvent::Jumped);
            }
        }
        (Intent::Jump | Intent::StartOrRestart | Intent::Start, GamePhase::Idle) => {
            start_run(state)
        }
        (Intent::Jump | Intent::StartOrRestart | Intent::Restart, GamePhase::GameOver) => {
            restart_run(state)
        }
        (Intent::ShowMenu, GamePhase::GameOver) => show_menu(state),

        _ => {}
    }
}

fn shift(state: &mut GameState, direction: i64) {
    if state.player.shift_lane(direction, &state.config) {
        state.events.push(GameEvent::LaneChanged {
            lane: state.player.lane,
        });
    }
}
