//! Lane Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use lane_runner::audio::{AudioManager, SoundEffect};
    use lane_runner::persistence::{KeyValueStore, LocalStore, UnavailableStore};
    use lane_runner::renderer::{CanvasRenderer, Renderer};
    use lane_runner::sim::{GamePhase, Intent, Snapshot};
    use lane_runner::{Runner, RunnerConfig};

    /// Game instance holding all state
    struct Game {
        runner: Runner,
        renderer: CanvasRenderer,
        audio: AudioManager,
    }

    impl Game {
        /// Advance, draw, and react to events for one animation frame
        fn frame(&mut self, time: f64) {
            let snapshot = self.runner.frame(time);
            self.renderer.draw(&snapshot);

            self.audio.set_muted(!self.runner.settings().sound_enabled);
            for event in self.runner.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
            }

            update_hud(&snapshot);
        }
    }

    /// Update HUD elements in DOM
    fn update_hud(snapshot: &Snapshot) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let set_text = |id: &str, text: &str| {
            if let Some(el) = document.get_element_by_id(id) {
                if el.text_content().as_deref() != Some(text) {
                    el.set_text_content(Some(text));
                }
            }
        };
        let set_visible = |id: &str, visible: bool| {
            if let Some(el) = document.get_element_by_id(id) {
                let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
            }
        };

        set_text("score-value", &snapshot.score.to_string());
        set_text("coins-value", &snapshot.coins_collected.to_string());
        set_text("speed-value", &format!("x{:.1}", snapshot.speed_multiplier));
        set_text("last-score-value", &snapshot.last_score.to_string());
        set_text("best-score-value", &snapshot.best_score.to_string());

        set_visible("hud", snapshot.phase == GamePhase::Running);
        set_visible("menu", snapshot.phase == GamePhase::Idle);
        set_visible("game-over", snapshot.phase == GamePhase::GameOver);
    }

    /// LocalStorage if the browser allows it, otherwise play without saving
    fn open_store() -> Box<dyn KeyValueStore> {
        match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{} - scores will not be saved", e);
                Box::new(UnavailableStore)
            }
        }
    }

    /// Optional tuning override embedded in the page as JSON
    fn load_config(document: &web_sys::Document) -> RunnerConfig {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return RunnerConfig::default();
        };
        match RunnerConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded tuning override");
                config
            }
            Err(e) => {
                log::warn!("{} - using default tuning", e);
                RunnerConfig::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lane Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        canvas.set_width((canvas.client_width() as f64 * dpr) as u32);
        canvas.set_height((canvas.client_height() as f64 * dpr) as u32);

        let config = load_config(&document);
        let renderer = CanvasRenderer::new(canvas, config.spawn_distance).expect("no 2d context");

        let seed = js_sys::Date::now() as u64;
        let runner = Runner::new(config, seed, open_store()).expect("invalid tuning");
        let audio = AudioManager::new(!runner.settings().sound_enabled);

        let game = Rc::new(RefCell::new(Game {
            runner,
            renderer,
            audio,
        }));

        setup_keyboard(game.clone());
        setup_buttons(game.clone());
        setup_visibility(game.clone());

        request_animation_frame(game);

        log::info!("Lane Runner running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if game.borrow_mut().runner.push_key(&event.code(), event.repeat()) {
                // Keep arrows/space from scrolling the page
                event.prevent_default();
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        let mut buttons = vec![
            ("start-btn".to_string(), Intent::Start),
            ("restart-btn".to_string(), Intent::Restart),
            ("menu-btn".to_string(), Intent::ShowMenu),
            ("sound-btn".to_string(), Intent::ToggleSound),
        ];
        for skin in 0..lane_runner::renderer::SKINS.len() {
            buttons.push((format!("skin-{}", skin), Intent::SelectSkin(skin as i64)));
        }

        for (id, intent) in buttons {
            let Some(btn) = document.get_element_by_id(&id) else {
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().runner.push_intent(intent);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_visibility(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                game.borrow_mut().runner.suspend_clock();
                log::info!("Tab hidden - frame clock reset");
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lane Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2024);
    autopilot::run(seed, 3);
}

/// Headless demo: a simple bot plays a few seeded runs
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use lane_runner::persistence::MemoryStore;
    use lane_runner::sim::{EntityKind, GamePhase, GameState, Intent, restart_run};
    use lane_runner::{Runner, RunnerConfig};

    const DT: f32 = 1.0 / 60.0;
    /// Give up on a run after this many simulated seconds
    const MAX_RUN_SECS: f32 = 180.0;

    /// Distance ahead at which an obstacle needs a reaction
    fn danger_zone(state: &GameState) -> std::ops::Range<f32> {
        let lookahead = state.speed() * 0.35;
        -lookahead - 1.0..1.0
    }

    fn lane_blocked(state: &GameState, lane: u32) -> bool {
        let zone = danger_zone(state);
        state
            .entities
            .iter()
            .any(|e| e.kind == EntityKind::Obstacle && e.lane == lane && zone.contains(&e.z))
    }

    /// Sidestep into a clear neighbouring lane, otherwise jump
    fn decide(state: &GameState) -> Option<Intent> {
        let lane = state.player.lane;
        if !lane_blocked(state, lane) {
            return None;
        }
        if lane > 0 && !lane_blocked(state, lane - 1) {
            return Some(Intent::MoveLeft);
        }
        if lane + 1 < state.config.lane_count && !lane_blocked(state, lane + 1) {
            return Some(Intent::MoveRight);
        }
        (!state.player.airborne).then_some(Intent::Jump)
    }

    pub fn run(seed: u64, runs: u32) {
        let mut runner =
            match Runner::new(RunnerConfig::default(), seed, Box::new(MemoryStore::new())) {
                Ok(runner) => runner,
                Err(e) => {
                    log::error!("{}", e);
                    return;
                }
            };
        runner.push_intent(Intent::Start);

        for run in 1..=runs {
            let mut t = 0.0;
            loop {
                if let Some(intent) = decide(runner.state()) {
                    runner.push_intent(intent);
                }
                let snapshot = runner.step(DT);
                t += DT;
                if snapshot.phase == GamePhase::GameOver || t >= MAX_RUN_SECS {
                    break;
                }
            }

            let state = runner.state();
            let crashed = state.phase == GamePhase::GameOver;
            log::info!(
                "Run {}: {:.1}s, score {}, coins {}, speed x{:.2}{}",
                run,
                state.elapsed_time,
                state.display_score(),
                state.coins_collected,
                state.speed_multiplier,
                if crashed { "" } else { " (survived)" }
            );

            runner.drain_events();
            if crashed {
                runner.push_intent(Intent::Restart);
            } else {
                restart_run(runner.state_mut());
            }
        }

        let scores = runner.scores();
        println!(
            "Seed {}: best {}, last {}",
            seed, scores.best_score, scores.last_score
        );
    }
}
