use crate::{Side, Sound};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Human player
    pub right: u8, // AI opponent
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub const DEFAULT_SEED: u64 = 12345;

    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub sounds: Vec<Sound>,
    pub scored: Option<Side>,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sounds.clear();
        self.scored = None;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
            && self.scored.is_none()
            && !self.ball_hit_paddle
            && !self.ball_hit_wall
    }

    pub(crate) fn wall_hit(&mut self) {
        self.ball_hit_wall = true;
        self.sounds.push(Sound::Hit);
    }

    pub(crate) fn paddle_hit(&mut self) {
        self.ball_hit_paddle = true;
        self.sounds.push(Sound::Hit);
    }

    pub(crate) fn point(&mut self, side: Side) {
        self.scored = Some(side);
        self.sounds.push(Sound::Score);
    }
}
