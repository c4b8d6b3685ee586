//! Frame clock
//!
//! Converts animation-frame timestamps (milliseconds) into a simulation delta
//! time, clamped so a stalled or backgrounded tab cannot produce a huge step.

use crate::consts::{MAX_FRAME_DT, NOMINAL_DT};

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call, in `[0, MAX_FRAME_DT]`.
    /// The first call after creation or `reset` yields `NOMINAL_DT`.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => NOMINAL_DT,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Forget the previous timestamp (tab hidden, game restarted)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
