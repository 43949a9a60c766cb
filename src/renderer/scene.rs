//! Scene drawing
//!
//! Read-only: every function here takes `&GameState`.

use glam::Vec2;

use super::palette;
use super::{Ellipse, Surface};
use crate::consts::*;
use crate::sim::{GameState, Obstacle, ObstacleKind, Player, Rect};

/// Horizontal span a cloud wraps over, including off-screen slack
const CLOUD_WRAP: f32 = SURFACE_WIDTH + 220.0;
/// Clouds re-enter this far left of the visible edge
const CLOUD_SLACK: f32 = 110.0;
const OBSTACLE_RADIUS: f32 = 6.0;

pub const GAME_OVER_MESSAGE: &str = "Game over! Press Enter or Restart";

/// Draw one frame: background, obstacles, player, then the game-over overlay
pub fn draw<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    surface.clear();
    draw_background(surface, state);
    for obstacle in &state.obstacles {
        draw_obstacle(surface, obstacle);
    }
    draw_player(surface, &state.player);
    if state.is_game_over() {
        draw_overlay(surface);
    }
}

/// Position of cloud `index` after `elapsed_ms` of play
pub fn cloud_position(index: u32, elapsed_ms: f32, spacing: f32, drift: f32) -> Vec2 {
    let travel = index as f32 * spacing + elapsed_ms * drift;
    Vec2::new(
        travel.rem_euclid(CLOUD_WRAP) - CLOUD_SLACK,
        40.0 + (index % 3) as f32 * 22.0,
    )
}

fn draw_background<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    let tuning = &state.tuning;
    for i in 0..tuning.cloud_count {
        let pos = cloud_position(i, state.time_ms, tuning.cloud_spacing, tuning.cloud_drift);
        surface.fill_ellipses(
            &[
                Ellipse::new(pos.x, pos.y, 24.0, 14.0),
                Ellipse::new(pos.x + 18.0, pos.y + 4.0, 18.0, 11.0),
                Ellipse::new(pos.x - 18.0, pos.y + 6.0, 16.0, 10.0),
            ],
            palette::CLOUD,
        );
    }
    surface.fill_rect(
        Rect::new(0.0, GROUND_Y + 1.0, SURFACE_WIDTH, SURFACE_HEIGHT - GROUND_Y),
        palette::GROUND,
    );
}

fn draw_obstacle<S: Surface + ?Sized>(surface: &mut S, obstacle: &Obstacle) {
    let color = match obstacle.kind {
        ObstacleKind::Ground => palette::OBSTACLE_GROUND,
        ObstacleKind::Overhead => palette::OBSTACLE_OVERHEAD,
    };
    surface.fill_round_rect(obstacle.rect(), OBSTACLE_RADIUS, color);
}

/// Body, belly, flipper, beak, eye, feet. Purely visual.
fn draw_player<S: Surface + ?Sized>(surface: &mut S, player: &Player) {
    let x = player.pos.x;
    let feet = player.pos.y;
    let h = player.height;
    let top = feet - h;

    surface.fill_round_rect(Rect::new(x - 12.0, top, 24.0, h), 8.0, palette::PENGUIN_BODY);
    surface.fill_round_rect(
        Rect::new(x - 9.0, top + 10.0, 18.0, (h - 16.0).max(10.0)),
        6.0,
        palette::PENGUIN_BELLY,
    );
    surface.fill_round_rect(
        Rect::new(x - 22.0, top + 12.0, 12.0, (h - 18.0).min(16.0)),
        6.0,
        palette::PENGUIN_DARK,
    );
    surface.fill_triangle(
        [
            Vec2::new(x + 10.0, top + 14.0),
            Vec2::new(x + 22.0, top + 18.0),
            Vec2::new(x + 10.0, top + 22.0),
        ],
        palette::PENGUIN_ORANGE,
    );
    surface.fill_circle(Vec2::new(x + 2.0, top + 14.0), 2.2, palette::PENGUIN_DARK);
    surface.fill_rect(Rect::new(x - 10.0, feet - 4.0, 10.0, 4.0), palette::PENGUIN_ORANGE);
    surface.fill_rect(Rect::new(x, feet - 4.0, 10.0, 4.0), palette::PENGUIN_ORANGE);
}

fn draw_overlay<S: Surface + ?Sized>(surface: &mut S) {
    surface.fill_rect(
        Rect::new(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT),
        palette::OVERLAY,
    );
    surface.fill_text_centered(
        GAME_OVER_MESSAGE,
        Vec2::new(SURFACE_WIDTH / 2.0, SURFACE_HEIGHT / 2.0),
        palette::OVERLAY_FONT,
        palette::OVERLAY_TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that records what was drawn
    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Rect(Rect, String),
        RoundRect(Rect, String),
        Ellipses(usize, String),
        Triangle,
        Circle,
        Text(String),
    }

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn fill_rect(&mut self, rect: Rect, color: &str) {
            self.ops.push(Op::Rect(rect, color.to_string()));
        }
        fn fill_round_rect(&mut self, rect: Rect, _radius: f32, color: &str) {
            self.ops.push(Op::RoundRect(rect, color.to_string()));
        }
        fn fill_ellipses(&mut self, ellipses: &[Ellipse], color: &str) {
            self.ops.push(Op::Ellipses(ellipses.len(), color.to_string()));
        }
        fn fill_triangle(&mut self, _points: [Vec2; 3], _color: &str) {
            self.ops.push(Op::Triangle);
        }
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: &str) {
            self.ops.push(Op::Circle);
        }
        fn fill_text_centered(&mut self, text: &str, _at: Vec2, _font: &str, _color: &str) {
            self.ops.push(Op::Text(text.to_string()));
        }
    }

    fn state_with_obstacles() -> GameState {
        let mut state = GameState::with_seed(1);
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Ground, 500.0, 230.0, 30.0, 42.0));
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Overhead, 700.0, 190.0, 70.0, 32.0));
        state
    }

    #[test]
    fn test_draw_order() {
        let state = state_with_obstacles();
        let mut surface = Recorder::default();
        draw(&mut surface, &state);

        assert_eq!(surface.ops[0], Op::Clear);
        // Six clouds, then the ground band
        for op in &surface.ops[1..7] {
            assert_eq!(*op, Op::Ellipses(3, palette::CLOUD.to_string()));
        }
        assert!(matches!(&surface.ops[7], Op::Rect(_, c) if c == palette::GROUND));
        assert_eq!(
            surface.ops[8],
            Op::RoundRect(state.obstacles[0].rect(), palette::OBSTACLE_GROUND.to_string())
        );
        assert_eq!(
            surface.ops[9],
            Op::RoundRect(state.obstacles[1].rect(), palette::OBSTACLE_OVERHEAD.to_string())
        );
        // Penguin is last and there is no overlay while running
        assert!(!surface.ops.iter().any(|op| matches!(op, Op::Text(_))));
        assert!(matches!(surface.ops.last(), Some(Op::Rect(_, c)) if c == palette::PENGUIN_ORANGE));
    }

    #[test]
    fn test_overlay_only_when_game_over() {
        let mut state = state_with_obstacles();
        state.end_run();
        let mut surface = Recorder::default();
        draw(&mut surface, &state);

        let n = surface.ops.len();
        assert!(matches!(&surface.ops[n - 2], Op::Rect(r, c)
            if c == palette::OVERLAY && r.size.x == SURFACE_WIDTH && r.size.y == SURFACE_HEIGHT));
        assert_eq!(surface.ops[n - 1], Op::Text(GAME_OVER_MESSAGE.to_string()));
    }

    #[test]
    fn test_paused_draws_without_overlay() {
        let mut state = state_with_obstacles();
        state.phase = crate::sim::GamePhase::Paused;
        let mut surface = Recorder::default();
        draw(&mut surface, &state);
        assert!(!surface.ops.iter().any(|op| matches!(op, Op::Text(_))));
    }

    #[test]
    fn test_clouds_wrap_seamlessly() {
        let spacing = 170.0;
        let drift = 0.03;
        let wrap_ms = CLOUD_WRAP / drift;
        for i in 0..6 {
            let a = cloud_position(i, 1000.0, spacing, drift);
            let b = cloud_position(i, 1000.0 + wrap_ms, spacing, drift);
            assert!((a.x - b.x).abs() < 0.05, "cloud {} {:?} vs {:?}", i, a, b);
            assert!(a.x >= -CLOUD_SLACK && a.x < CLOUD_WRAP - CLOUD_SLACK);
        }
        assert_eq!(cloud_position(4, 0.0, spacing, drift).y, 62.0);
    }

    #[test]
    fn test_ducking_penguin_belly_keeps_min_height() {
        let mut state = GameState::with_seed(1);
        state.player.height = 20.0;
        let mut surface = Recorder::default();
        draw(&mut surface, &state);
        let belly = surface.ops.iter().find_map(|op| match op {
            Op::RoundRect(r, c) if c == palette::PENGUIN_BELLY => Some(*r),
            _ => None,
        });
        assert_eq!(belly.map(|r| r.size.y), Some(10.0));
    }
}
