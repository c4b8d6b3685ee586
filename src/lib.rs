//! Lane Runner - a three-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, spawning, collisions, scoring)
//! - `game`: Frame driver tying clock, input, simulation and storage together
//! - `renderer`: Snapshot consumers (Canvas 2D in the browser)
//! - `platform`: Frame clock and keyboard mapping
//! - `persistence`: Scalar key/value storage (LocalStorage on web)
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Runner;
pub use highscores::ScoreBook;
pub use settings::Settings;
pub use tuning::{ConfigError, RunnerConfig};

/// Frame timing constants
pub mod consts {
    /// Largest simulation step; longer frames (tab stalls) are truncated
    pub const MAX_FRAME_DT: f32 = 0.06;
    /// Step used for the very first frame
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;
}
