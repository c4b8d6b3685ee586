//! Player preferences
//!
//! Persisted separately from scores. The core reads them at startup; toggles
//! from the UI write them back immediately.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, KeyValueStore, keys};

/// Player preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Index into the skin palette
    pub selected_skin: usize,
    /// Pickup/crash/jump beeps
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selected_skin: 0,
            sound_enabled: true,
        }
    }
}

impl Settings {
    /// Load preferences, clamping the skin to the available palette
    pub fn load(store: &dyn KeyValueStore, skin_count: usize) -> Self {
        let defaults = Self::default();
        let selected_skin: usize =
            persistence::read_or(store, keys::SELECTED_SKIN, defaults.selected_skin);
        Self {
            selected_skin: selected_skin.min(skin_count.saturating_sub(1)),
            sound_enabled: persistence::read_or(store, keys::SOUND_ENABLED, defaults.sound_enabled),
        }
    }

    /// Flip sound on/off and persist; returns the new value
    pub fn toggle_sound(&mut self, store: &mut dyn KeyValueStore) -> bool {
        self.sound_enabled = !self.sound_enabled;
        persistence::write(store, keys::SOUND_ENABLED, self.sound_enabled);
        log::info!("Sound {}", if self.sound_enabled { "on" } else { "off" });
        self.sound_enabled
    }

    /// Pick a skin (clamped to the palette) and persist; returns the stored index
    pub fn select_skin(
        &mut self,
        store: &mut dyn KeyValueStore,
        index: i64,
        skin_count: usize,
    ) -> usize {
        let max = skin_count.saturating_sub(1) as i64;
        self.selected_skin = index.clamp(0, max) as usize;
        persistence::write(store, keys::SELECTED_SKIN, self.selected_skin);
        self.selected_skin
    }
}
