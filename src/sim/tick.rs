//! Per-frame simulation step
//!
//! Advances a running game by one (clamped) delta time: player movement,
//! spawning, entity scrolling, collisions, removal, scoring and the speed
//! ramp, in that order.

use super::collision::touches_player;
use super::state::{EntityKind, GameEvent, GamePhase, GameState, alloc_entity_id};
use crate::consts::MAX_FRAME_DT;
use crate::tuning::RunnerConfig;

/// Speed multiplier after `elapsed` seconds: linear ramp, capped
pub fn speed_multiplier(config: &RunnerConfig, elapsed: f32) -> f32 {
    (1.0 + elapsed * config.speed_ramp).min(config.max_speed_multiplier)
}

/// Begin a fresh run from the menu
pub fn start_run(state: &mut GameState) {
    state.reset_run();
    state.set_phase(GamePhase::Running);
    announce_totals(state);
}

/// Begin a fresh run after a game over
pub fn restart_run(state: &mut GameState) {
    log::info!("Restarting run");
    start_run(state);
}

/// Return to the menu
pub fn show_menu(state: &mut GameState) {
    state.set_phase(GamePhase::Idle);
}

fn announce_totals(state: &mut GameState) {
    state.events.push(GameEvent::ScoreChanged {
        score: state.display_score(),
    });
    state.events.push(GameEvent::CoinsChanged {
        coins: state.coins_collected,
    });
}

/// Advance the game state by `dt` seconds. Does nothing unless Running.
pub fn tick(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }
    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    let score_before = state.display_score();

    state.speed_multiplier = speed_multiplier(&state.config, state.elapsed_time);
    let speed = state.speed();

    state.player.integrate(dt, &state.config);

    // Spawn
    let spawned = {
        let GameState {
            spawner,
            rng,
            config,
            next_id,
            elapsed_time,
            ..
        } = &mut *state;
        spawner.tick(dt, *elapsed_time, config, rng, || alloc_entity_id(next_id))
    };
    if let Some(entity) = spawned {
        state.entities.push(entity);
    }

    // Scroll toward the player
    for entity in &mut state.entities {
        entity.z += speed * dt;
    }

    // Obstacles first: a grounded hit ends the run before anything else is
    // awarded this tick
    if !state.player.airborne {
        let hit = state.entities.iter().find(|e| {
            e.kind == EntityKind::Obstacle && touches_player(&state.player, e, &state.config)
        });
        if let Some(entity) = hit {
            let (id, lane) = (entity.id, entity.lane);
            state.events.push(GameEvent::CollisionOccurred { id, lane });
            state.set_phase(GamePhase::GameOver);
            log::info!(
                "Run over after {:.1}s: score {}, coins {}",
                state.elapsed_time,
                state.display_score(),
                state.coins_collected
            );
            return;
        }
    }

    // Collectibles, regardless of height
    let mut picked = Vec::new();
    state.entities.retain(|e| {
        let take =
            e.kind == EntityKind::Collectible && touches_player(&state.player, e, &state.config);
        if take {
            picked.push((e.id, e.lane));
        }
        !take
    });
    for (id, lane) in picked {
        state.coins_collected += 1;
        state.score += state.config.pickup_bonus;
        state.events.push(GameEvent::PickupOccurred { id, lane });
        state.events.push(GameEvent::CoinsChanged {
            coins: state.coins_collected,
        });
    }

    // Anything behind the player is gone
    let despawn_z = state.config.despawn_z;
    let mut passed = Vec::new();
    state.entities.retain(|e| {
        let gone = e.z > despawn_z;
        if gone {
            passed.push((e.id, e.kind));
        }
        !gone
    });
    for (id, kind) in passed {
        match kind {
            EntityKind::Obstacle => {
                state.score += state.config.pass_bonus;
                state.events.push(GameEvent::ObstaclePassed { id });
            }
            EntityKind::Collectible => state.events.push(GameEvent::CollectibleMissed { id }),
        }
    }

    // Distance score and difficulty clock
    state.elapsed_time += dt;
    state.score += state.config.distance_score_rate * f64::from(speed * dt);

    let score_after = state.display_score();
    if score_after != score_before {
        state.events.push(GameEvent::ScoreChanged { score: score_after });
    }
}
