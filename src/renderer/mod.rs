//! Rendering boundary
//!
//! The simulation hands a [`Snapshot`] to a [`Renderer`] once per frame and
//! never reads anything back. The browser build draws with Canvas 2D using a
//! fixed chase-camera projection.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::Snapshot;

/// Consumer of per-frame snapshots
pub trait Renderer {
    fn draw(&mut self, frame: &Snapshot);
}

/// Player color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skin {
    pub name: &'static str,
    /// CSS color of the player's body
    pub body: &'static str,
    /// CSS color of the player's outline
    pub trim: &'static str,
}

/// Selectable skins
pub const SKINS: [Skin; 4] = [
    Skin {
        name: "Cyan",
        body: "#00ffff",
        trim: "#007f7f",
    },
    Skin {
        name: "Lime",
        body: "#7cff4f",
        trim: "#2f7f1a",
    },
    Skin {
        name: "Magenta",
        body: "#ff4fd8",
        trim: "#7f1a6b",
    },
    Skin {
        name: "Gold",
        body: "#ffd24f",
        trim: "#8a6a12",
    },
];

/// Skin for an index, clamped to the palette
pub fn skin(index: usize) -> &'static Skin {
    &SKINS[index.min(SKINS.len() - 1)]
}

/// Chase camera: behind and above the player, looking down the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub height: f32,
    pub distance: f32,
    /// Focal length as a fraction of viewport height
    pub focal: f32,
    /// Horizon line as a fraction of viewport height
    pub horizon: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            height: 3.0,
            distance: 6.0,
            focal: 0.9,
            horizon: 0.3,
        }
    }
}

impl Camera {
    /// Project a world point to screen pixels. Returns `(x, y, scale)` where
    /// `scale` is pixels per world unit at that depth, or `None` behind the camera.
    pub fn project(&self, x: f32, y: f32, z: f32, width: f32, height: f32) -> Option<(f32, f32, f32)> {
        let depth = self.distance - z;
        if depth <= 0.1 {
            return None;
        }
        let scale = self.focal * height / depth;
        let sx = width / 2.0 + x * scale;
        let sy = height * self.horizon + (self.height - y) * scale;
        Some((sx, sy, scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_clamped() {
        assert_eq!(skin(0).name, "Cyan");
        assert_eq!(skin(99).name, SKINS[SKINS.len() - 1].name);
    }

    #[test]
    fn test_far_objects_shrink_toward_horizon() {
        let camera = Camera::default();
        let (_, near_y, near_scale) = camera.project(0.0, 0.0, 0.0, 800.0, 600.0).unwrap();
        let (_, far_y, far_scale) = camera.project(0.0, 0.0, -40.0, 800.0, 600.0).unwrap();
        assert!(far_scale < near_scale);
        assert!(far_y < near_y);
        assert!(far_y > 600.0 * camera.horizon);
    }

    #[test]
    fn test_lanes_spread_from_center() {
        let camera = Camera::default();
        let (left, _, _) = camera.project(-2.0, 0.0, 0.0, 800.0, 600.0).unwrap();
        let (right, _, _) = camera.project(2.0, 0.0, 0.0, 800.0, 600.0).unwrap();
        assert!((400.0 - left - (right - 400.0)).abs() < 1e-3);
        assert!(camera.project(0.0, 0.0, 10.0, 800.0, 600.0).is_none());
    }
}
