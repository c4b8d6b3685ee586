//! Audio cues
//!
//! Procedurally generated beeps via the Web Audio API - no external files.
//! Which cue a game event triggers is decided here on every platform; playback
//! only exists in the browser build.

use crate::sim::{GameEvent, GamePhase};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Run started
    Start,
    /// Player switched lanes
    LaneSwitch,
    /// Player took off
    Jump,
    /// Coin collected
    Pickup,
    /// Obstacle hit
    Crash,
    /// Run finished with a new best score
    HighScore,
}

impl SoundEffect {
    /// Cue for a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PhaseChanged {
                to: GamePhase::Running,
                ..
            } => Some(SoundEffect::Start),
            GameEvent::LaneChanged { .. } => Some(SoundEffect::LaneSwitch),
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::PickupOccurred { .. } => Some(SoundEffect::Pickup),
            GameEvent::CollisionOccurred { .. } => Some(SoundEffect::Crash),
            GameEvent::NewBestScore { .. } => Some(SoundEffect::HighScore),
            _ => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
        muted: bool,
    }

    impl AudioManager {
        pub fn new(muted: bool) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: 0.8,
                muted,
            }
        }

        /// Mute/unmute all audio
        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if self.muted {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let vol = self.volume;
            match effect {
                SoundEffect::Start => self.play_sweep(ctx, vol * 0.3, 200.0, 600.0, 0.2),
                SoundEffect::LaneSwitch => self.play_blip(ctx, vol * 0.15, 500.0, 0.05),
                SoundEffect::Jump => self.play_sweep(ctx, vol * 0.25, 300.0, 700.0, 0.15),
                SoundEffect::Pickup => self.play_arpeggio(ctx, vol * 0.25, &[600.0, 800.0, 1000.0], 0.08),
                SoundEffect::Crash => self.play_crash(ctx, vol),
                SoundEffect::HighScore => {
                    self.play_arpeggio(ctx, vol * 0.25, &[500.0, 600.0, 700.0, 800.0, 1000.0], 0.08)
                }
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short fixed-pitch tick
        fn play_blip(&self, ctx: &AudioContext, vol: f32, freq: f32, length: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Square) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + length)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + length + 0.02).ok();
        }

        /// Pitch glide between two frequencies
        fn play_sweep(&self, ctx: &AudioContext, vol: f32, from: f32, to: f32, length: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, from, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + length)
                .ok();
            osc.frequency().set_value_at_time(from, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(to, t + length * 0.75)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + length + 0.05).ok();
        }

        /// Rising note sequence
        fn play_arpeggio(&self, ctx: &AudioContext, vol: f32, notes: &[f32], spacing: f64) {
            for (i, freq) in notes.iter().enumerate() {
                let delay = i as f64 * spacing;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.2).ok();
                }
            }
        }

        /// Crash - low descending buzz
        fn play_crash(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.4, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.5)
                .ok();
            osc.frequency().set_value_at_time(220.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(40.0, t + 0.5)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.6).ok();
        }
    }
}
