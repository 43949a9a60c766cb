//! Canvas 2D surface (WASM only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Ellipse, Surface};
use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::sim::Rect;

/// Draws onto a `<canvas>` through its 2D context in logical units
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    /// Size the backing store for the device pixel ratio and scale the
    /// context so callers keep drawing in logical units
    pub fn attach(canvas: &HtmlCanvasElement, device_pixel_ratio: f64) -> Result<Self, JsValue> {
        let dpr = device_pixel_ratio.max(1.0);
        canvas.set_width((SURFACE_WIDTH as f64 * dpr) as u32);
        canvas.set_height((SURFACE_HEIGHT as f64 * dpr) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        ctx.scale(dpr, dpr)?;
        log::info!(
            "Canvas attached: {}x{} backing store (dpr {})",
            canvas.width(),
            canvas.height(),
            dpr
        );
        Ok(Self { ctx })
    }
}

impl Surface for Canvas2d {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, SURFACE_WIDTH as f64, SURFACE_HEIGHT as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: &str) {
        let (x, y) = (rect.left() as f64, rect.top() as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);
        let r = (radius as f64).min(w / 2.0).min(h / 2.0).max(0.0);

        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
        let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
        let _ = ctx.arc_to(x, y + h, x, y, r);
        let _ = ctx.arc_to(x, y, x + w, y, r);
        ctx.close_path();
        ctx.set_fill_style_str(color);
        ctx.fill();
    }

    fn fill_ellipses(&mut self, ellipses: &[Ellipse], color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        for e in ellipses {
            let _ = self.ctx.ellipse(
                e.center.x as f64,
                e.center.y as f64,
                e.radii.x as f64,
                e.radii.y as f64,
                0.0,
                0.0,
                TAU,
            );
        }
        self.ctx.fill();
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(points[0].x as f64, points[0].y as f64);
        self.ctx.line_to(points[1].x as f64, points[1].y as f64);
        self.ctx.line_to(points[2].x as f64, points[2].y as f64);
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_text_centered(&mut self, text: &str, at: Vec2, font: &str, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
