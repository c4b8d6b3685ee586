//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clamped delta time only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod intent;
pub mod player;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, touches_player};
pub use intent::{Intent, IntentQueue, apply_intent};
pub use player::ease_out_cubic;
pub use snapshot::Snapshot;
pub use spawn::SpawnDirector;
pub use state::{
    EntityKind, GROUND_LEVEL, GameEvent, GamePhase, GameState, LaneTween, Player, SpawnedEntity,
};
pub use tick::{restart_run, show_menu, speed_multiplier, start_run, tick};
