//! Read-only view of a frame for renderers

use glam::Vec2;

use crate::{Arena, RoundState, Score};

/// Everything a renderer needs to draw one frame
#[derive(Clone, Copy, Debug)]
pub struct FrameView {
    pub arena: Arena,
    pub paddle_width: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub score: Score,
    pub state: RoundState,
}

/// Draws frames. Receives state only; gives nothing back to the simulation.
pub trait Renderer {
    fn draw(&mut self, view: &FrameView);
}
