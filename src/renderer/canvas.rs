//! Canvas 2D renderer (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Camera, Renderer, skin};
use crate::sim::{EntityKind, GamePhase, Snapshot};

const TRACK_COLOR: &str = "#222222";
const LANE_LINE_COLOR: &str = "#444444";
const OBSTACLE_COLOR: &str = "#ff4444";
const COIN_COLOR: &str = "#ffd700";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    camera: Camera,
    track_length: f32,
}

impl CanvasRenderer {
    /// Returns `None` if the canvas has no 2D context
    pub fn new(canvas: HtmlCanvasElement, track_length: f32) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx,
            camera: Camera::default(),
            track_length,
        })
    }

    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    /// Box standing on the track, drawn as its projected front face
    fn draw_box(&self, x: f32, y: f32, z: f32, size: f32, fill: &str, stroke: Option<&str>) {
        let (w, h) = self.size();
        let Some((sx, sy, scale)) = self.camera.project(x, y, z + size / 2.0, w, h) else {
            return;
        };
        let side = size * scale;
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill_rect((sx - side / 2.0) as f64, (sy - side) as f64, side as f64, side as f64);
        if let Some(stroke) = stroke {
            self.ctx.set_stroke_style_str(stroke);
            self.ctx.set_line_width(2.0);
            self.ctx.stroke_rect((sx - side / 2.0) as f64, (sy - side) as f64, side as f64, side as f64);
        }
    }

    fn draw_track(&self, lane_count: u32, lane_spacing: f32) {
        let (w, h) = self.size();
        let half = lane_count as f32 * lane_spacing / 2.0;
        let corners = [
            self.camera.project(-half, 0.0, 1.0, w, h),
            self.camera.project(half, 0.0, 1.0, w, h),
            self.camera.project(half, 0.0, -self.track_length, w, h),
            self.camera.project(-half, 0.0, -self.track_length, w, h),
        ];
        let ctx = &self.ctx;
        ctx.set_fill_style_str(TRACK_COLOR);
        ctx.begin_path();
        for (i, (x, y, _)) in corners.iter().flatten().enumerate() {
            if i == 0 {
                ctx.move_to(*x as f64, *y as f64);
            } else {
                ctx.line_to(*x as f64, *y as f64);
            }
        }
        ctx.close_path();
        ctx.fill();

        ctx.set_stroke_style_str(LANE_LINE_COLOR);
        ctx.set_line_width(1.0);
        for boundary in 1..lane_count {
            let x = -half + boundary as f32 * lane_spacing;
            let near = self.camera.project(x, 0.0, 1.0, w, h);
            let far = self.camera.project(x, 0.0, -self.track_length, w, h);
            if let (Some((nx, ny, _)), Some((fx, fy, _))) = (near, far) {
                ctx.begin_path();
                ctx.move_to(nx as f64, ny as f64);
                ctx.line_to(fx as f64, fy as f64);
                ctx.stroke();
            }
        }
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, frame: &Snapshot) {
        let (w, h) = self.size();
        self.ctx.set_fill_style_str("#000000");
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);

        self.draw_track(frame.lane_count, frame.lane_spacing);

        // Far to near so closer boxes cover distant ones
        let mut entities: Vec<_> = frame.entities.iter().collect();
        entities.sort_by(|a, b| a.z.total_cmp(&b.z));
        for entity in entities {
            let x = frame.lane_x(entity.lane);
            match entity.kind {
                EntityKind::Obstacle => {
                    self.draw_box(x, 0.0, entity.z, entity.size, OBSTACLE_COLOR, None)
                }
                EntityKind::Collectible => {
                    self.draw_box(x, 0.3, entity.z, entity.size, COIN_COLOR, None)
                }
            }
        }

        let skin = skin(frame.skin);
        let p = frame.player_position;
        let fill = if frame.phase == GamePhase::GameOver {
            OBSTACLE_COLOR
        } else {
            skin.body
        };
        self.draw_box(p.x, p.y, p.z, 1.0, fill, Some(skin.trim));
    }
}
