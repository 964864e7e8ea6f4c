use glam::Vec2;

use crate::{Arena, Config, GameRng};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,  // Human player
    Right, // AI opponent
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Keyboard or touch input
    Human,
    /// Ball-following heuristic
    Ai,
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to [0, H - paddle height]
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, arena: &Arena) -> f32 {
        self.y + arena.paddle_height / 2.0
    }

    /// Strictly between the top and bottom edges
    pub fn spans(&self, y: f32, arena: &Arena) -> bool {
        y > self.y && y < self.y + arena.paddle_height
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // Pixels per frame
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back at the centre with a fresh random velocity.
    ///
    /// Horizontal direction is a coin flip at full serve speed; the vertical
    /// component is uniform over a narrower band so rallies don't start steep.
    pub fn serve(&mut self, arena: &Arena, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        let speed = config.ball_speed_initial;
        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vy = rng.0.gen_range(-1.0f32..1.0) * speed * config.ball_serve_vertical_factor;

        self.pos = arena.center();
        self.vel = Vec2::new(dir * speed, vy);
    }
}
