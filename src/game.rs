//! Frame driver
//!
//! [`Runner`] owns everything a session needs: the simulation state, the frame
//! clock, the intent queue, and the persistence store. The host calls
//! [`Runner::frame`] once per animation frame, then hands the returned
//! snapshot to its renderer and drains events for HUD and audio.

use crate::highscores::ScoreBook;
use crate::persistence::KeyValueStore;
use crate::platform::{FrameClock, intent_for_key};
use crate::renderer::SKINS;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, Intent, IntentQueue, Snapshot, apply_intent, tick};
use crate::tuning::{ConfigError, RunnerConfig};

pub struct Runner {
    state: GameState,
    clock: FrameClock,
    intents: IntentQueue,
    store: Box<dyn KeyValueStore>,
    scores: ScoreBook,
    settings: Settings,
    events: Vec<GameEvent>,
}

impl Runner {
    /// New idle session; scores and preferences are read from `store`.
    /// Fails if `config` does not validate.
    pub fn new(
        config: RunnerConfig,
        seed: u64,
        store: Box<dyn KeyValueStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let scores = ScoreBook::load(store.as_ref());
        let settings = Settings::load(store.as_ref(), SKINS.len());
        log::info!("Runner created with seed {}", seed);
        Ok(Self {
            state: GameState::with_config(config, seed),
            clock: FrameClock::new(),
            intents: IntentQueue::new(),
            store,
            scores,
            settings,
            events: Vec::new(),
        })
    }

    /// Queue an intent for the next frame
    pub fn push_intent(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    /// Queue the intent for a raw key press, if it maps to one
    pub fn push_key(&mut self, code: &str, repeat: bool) -> bool {
        match intent_for_key(code, repeat) {
            Some(intent) => {
                self.push_intent(intent);
                true
            }
            None => false,
        }
    }

    /// Advance one animation frame stamped `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> Snapshot {
        let dt = self.clock.advance(now_ms);
        self.step(dt)
    }

    /// Apply queued intents, tick by `dt`, settle persistence
    pub fn step(&mut self, dt: f32) -> Snapshot {
        let pending: Vec<Intent> = self.intents.drain().collect();
        for intent in pending {
            self.apply(intent);
        }

        tick(&mut self.state, dt);

        for event in self.state.drain_events() {
            let run_ended = matches!(
                event,
                GameEvent::PhaseChanged {
                    to: GamePhase::GameOver,
                    ..
                }
            );
            self.events.push(event);
            if run_ended {
                self.finish_run();
            }
        }

        self.snapshot()
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::ToggleSound => {
                self.settings.toggle_sound(self.store.as_mut());
            }
            Intent::SelectSkin(index) => {
                self.settings
                    .select_skin(self.store.as_mut(), index, SKINS.len());
            }
            _ => apply_intent(&mut self.state, intent),
        }
    }

    /// Persist the run that just ended
    fn finish_run(&mut self) {
        let score = self.state.display_score();
        if self.scores.record(self.store.as_mut(), score) {
            self.events.push(GameEvent::NewBestScore { score });
        }
    }

    /// Forget frame timing and pending input, e.g. when the page was hidden
    pub fn suspend_clock(&mut self) {
        self.clock.reset();
        self.intents.clear();
    }

    /// Current frame as the renderer sees it
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::capture(&self.state);
        snapshot.best_score = self.scores.best_score;
        snapshot.last_score = self.scores.last_score;
        snapshot.skin = self.settings.selected_skin;
        snapshot
    }

    /// Take notifications raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn scores(&self) -> &ScoreBook {
        &self.scores
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}
