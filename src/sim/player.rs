//! Player movement: lane tween and jump physics
//!
//! Lane changes run a fixed-duration ease-out cubic tween starting from the
//! live x position, so an interrupted tween never jumps back. Jumps use
//! semi-implicit Euler under constant gravity and land exactly on the ground.

use super::state::{GROUND_LEVEL, LaneTween, Player};
use crate::tuning::RunnerConfig;

/// Ease-out cubic: fast start, gentle arrival, monotonic on [0, 1]
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

impl Player {
    /// Head for `target`, clamped to the track. Returns true if the lane changed.
    ///
    /// Asking for the lane already targeted is a no-op, including while the
    /// tween toward it is still running.
    pub fn set_lane(&mut self, target: i64, config: &RunnerConfig) -> bool {
        let max_lane = i64::from(config.lane_count.saturating_sub(1));
        let target = target.clamp(0, max_lane) as u32;
        if target == self.lane {
            return false;
        }

        self.lane = target;
        self.tween = Some(LaneTween {
            from: self.position.x,
            to: config.lane_center(target),
            elapsed: 0.0,
            duration: config.lane_tween_duration,
        });
        true
    }

    /// Move one lane left (-1) or right (+1); no-op at the edge
    pub fn shift_lane(&mut self, direction: i64, config: &RunnerConfig) -> bool {
        self.set_lane(i64::from(self.lane) + direction.signum(), config)
    }

    /// Advance the lane tween
    pub fn integrate_lane(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };

        tween.elapsed += dt.max(0.0);
        let t = tween.elapsed / tween.duration;
        if t >= 1.0 {
            self.position.x = tween.to;
            self.tween = None;
        } else {
            self.position.x = tween.from + (tween.to - tween.from) * ease_out_cubic(t);
        }
    }

    /// Start a jump. Returns false if already in the air.
    pub fn jump(&mut self, config: &RunnerConfig) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.vertical_velocity = config.jump_impulse;
        true
    }

    /// Apply gravity and land
    pub fn integrate_vertical(&mut self, dt: f32, config: &RunnerConfig) {
        if !self.airborne {
            return;
        }

        let dt = dt.max(0.0);
        self.vertical_velocity += config.gravity * dt;
        self.position.y += self.vertical_velocity * dt;

        if self.position.y <= GROUND_LEVEL {
            self.position.y = GROUND_LEVEL;
            self.vertical_velocity = 0.0;
            self.airborne = false;
        }
    }

    /// Advance both movement axes
    pub fn integrate(&mut self, dt: f32, config: &RunnerConfig) {
        self.integrate_lane(dt);
        self.integrate_vertical(dt, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config() -> RunnerConfig {
        RunnerConfig::default()
    }

    #[test]
    fn test_set_lane_clamps() {
        let config = config();
        let mut player = Player::new(&config);

        assert!(player.set_lane(99, &config));
        assert_eq!(player.lane, 2);
        assert!(!player.shift_lane(1, &config));
        assert_eq!(player.lane, 2);

        assert!(player.set_lane(-5, &config));
        assert_eq!(player.lane, 0);
        assert!(!player.shift_lane(-1, &config));
    }

    #[test]
    fn test_set_lane_tweens_instead_of_teleporting() {
        let config = config();
        let mut player = Player::new(&config);

        player.shift_lane(1, &config);
        assert_eq!(player.position.x, 0.0);

        player.integrate_lane(0.03);
        assert!(player.position.x > 0.0 && player.position.x < 2.0);

        player.integrate_lane(0.1);
        assert_eq!(player.position.x, 2.0);
        assert!(player.tween.is_none());
    }

    #[test]
    fn test_same_target_does_not_restart_tween() {
        let config = config();
        let mut player = Player::new(&config);

        player.shift_lane(1, &config);
        player.integrate_lane(0.05);
        let before = player.tween.expect("tween running");

        assert!(!player.set_lane(2, &config));
        assert_eq!(player.tween, Some(before));
    }

    #[test]
    fn test_reversal_starts_from_live_position() {
        let config = config();
        let mut player = Player::new(&config);

        player.shift_lane(1, &config);
        player.integrate_lane(0.04);
        let mid = player.position.x;

        player.shift_lane(-1, &config);
        let tween = player.tween.expect("tween running");
        assert_eq!(tween.from, mid);
        assert_eq!(tween.to, 0.0);
    }

    #[test]
    fn test_jump_arc_lands_exactly() {
        let config = config();
        let mut player = Player::new(&config);

        assert!(player.jump(&config));
        assert!(!player.jump(&config));

        let dt = 1.0 / 60.0;
        let mut steps = 0;
        while player.airborne {
            player.integrate_vertical(dt, &config);
            steps += 1;
            assert!(steps < 60, "jump never landed");
        }

        assert_eq!(player.position.y, GROUND_LEVEL);
        assert_eq!(player.vertical_velocity, 0.0);
        // ~0.5s of airtime at 60 Hz
        assert!((28..=32).contains(&steps), "airtime {} steps", steps);
    }

    #[test]
    fn test_jump_is_deterministic() {
        let config = config();
        let mut a = Player::new(&config);
        let mut b = Player::new(&config);
        a.jump(&config);
        b.jump(&config);
        for dt in [0.016, 0.017, 0.033, 0.008, 0.016] {
            a.integrate_vertical(dt, &config);
            b.integrate_vertical(dt, &config);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    proptest! {
        #[test]
        fn prop_jump_stays_in_bounds(dts in prop::collection::vec(0.0f32..0.06, 1..200)) {
            let config = config();
            let peak = config.peak_jump_height();
            let mut player = Player::new(&config);
            player.jump(&config);

            for dt in dts {
                player.integrate_vertical(dt, &config);
                prop_assert!(player.position.y >= GROUND_LEVEL);
                prop_assert!(player.position.y <= GROUND_LEVEL + peak + 1e-4);
            }

            // Finish the arc with a fixed step
            let mut guard = 0;
            while player.airborne {
                player.integrate_vertical(1.0 / 60.0, &config);
                guard += 1;
                prop_assert!(guard < 100);
            }
            prop_assert_eq!(player.position.y, GROUND_LEVEL);
            prop_assert_eq!(player.vertical_velocity, 0.0);
        }

        #[test]
        fn prop_lane_tween_converges_monotonically(
            target in 0i64..3,
            dts in prop::collection::vec(0.001f32..0.06, 1..40),
        ) {
            let config = config();
            let mut player = Player::new(&config);
            player.set_lane(target, &config);

            let goal = config.lane_center(target as u32);
            let start = player.position.x;
            let mut last_dist = (goal - start).abs();
            let mut elapsed = 0.0;

            for dt in dts {
                player.integrate_lane(dt);
                elapsed += dt;
                let dist = (goal - player.position.x).abs();
                prop_assert!(dist <= last_dist + 1e-6);
                // Never past the target
                prop_assert!((player.position.x - start) * (goal - start) >= -1e-6);
                prop_assert!((player.position.x - start).abs() <= (goal - start).abs() + 1e-6);
                if elapsed >= config.lane_tween_duration {
                    prop_assert_eq!(player.position.x, goal);
                    prop_assert!(player.tween.is_none());
                }
                last_dist = dist;
            }
        }
    }
}
