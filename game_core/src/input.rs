//! Input tracker
//!
//! Input events only write here; the tick reads it once per frame.

/// Logical paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Held keys plus touch drag state for the human paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    up: bool,
    down: bool,
    last_touch_y: Option<f32>,
    touch_delta: f32, // Accumulated since the last tick
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, dir: Direction) {
        self.set(dir, true);
    }

    pub fn release(&mut self, dir: Direction) {
        self.set(dir, false);
    }

    fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    /// Start a drag; no movement until the finger moves
    pub fn touch_start(&mut self, y: f32) {
        self.last_touch_y = Some(y);
    }

    pub fn touch_move(&mut self, y: f32) {
        if let Some(last) = self.last_touch_y {
            self.touch_delta += y - last;
        }
        self.last_touch_y = Some(y);
    }

    pub fn touch_end(&mut self) {
        self.last_touch_y = None;
    }

    pub fn last_touch_y(&self) -> Option<f32> {
        self.last_touch_y
    }

    /// Raw drag distance since the previous call
    pub fn take_touch_delta(&mut self) -> f32 {
        std::mem::take(&mut self.touch_delta)
    }

    /// Drop any drag distance not yet applied (held keys are kept)
    pub fn discard_touch_delta(&mut self) {
        self.touch_delta = 0.0;
    }
}
