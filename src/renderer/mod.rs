//! Rendering module
//!
//! Scene drawing is written against the [`Surface`] trait so it can run
//! without a browser. On WASM the trait is implemented for the canvas 2D
//! context.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod palette;
pub mod scene;

use glam::Vec2;

use crate::sim::Rect;

pub use scene::{cloud_position, draw};

/// An axis-aligned ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub radii: Vec2,
}

impl Ellipse {
    pub fn new(x: f32, y: f32, rx: f32, ry: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radii: Vec2::new(rx, ry),
        }
    }
}

/// Immediate-mode 2D drawing target in logical surface units.
///
/// Colors are CSS color strings.
pub trait Surface {
    /// Erase the whole surface
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    /// Rounded rectangle; `radius` is clamped to half the shorter side
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: &str);
    /// Several ellipses filled as one path
    fn fill_ellipses(&mut self, ellipses: &[Ellipse], color: &str);
    fn fill_triangle(&mut self, points: [Vec2; 3], color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    /// Text horizontally centered on `at`
    fn fill_text_centered(&mut self, text: &str, at: Vec2, font: &str, color: &str);
}
