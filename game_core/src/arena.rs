use glam::Vec2;
use thiserror::Error;

use crate::Params;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ArenaError {
    #[error("Arena dimensions must be positive and finite, got {width} x {height}")]
    InvalidSize { width: f32, height: f32 },

    #[error("Paddle height {paddle_height} exceeds arena height {height}")]
    PaddleTooTall { paddle_height: f32, height: f32 },
}

/// The playing field, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub paddle_height: f32,
}

impl Arena {
    /// Arena with the standard paddle height (a fifth of the height)
    pub fn new(width: f32, height: f32) -> Result<Self, ArenaError> {
        Self::with_paddle_height(width, height, height * Params::PADDLE_HEIGHT_FRACTION)
    }

    pub fn with_paddle_height(
        width: f32,
        height: f32,
        paddle_height: f32,
    ) -> Result<Self, ArenaError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ArenaError::InvalidSize { width, height });
        }
        if !valid(paddle_height) || paddle_height > height {
            return Err(ArenaError::PaddleTooTall {
                paddle_height,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            paddle_height,
        })
    }

    /// Size the arena to the browser viewport: capped width, fixed aspect ratio
    pub fn from_viewport(viewport_width: f32) -> Result<Self, ArenaError> {
        let width = Params::ARENA_MAX_WIDTH.min(viewport_width * Params::ARENA_VIEWPORT_FRACTION);
        Self::new(width, width * Params::ARENA_ASPECT)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Lowest legal paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    /// Paddle top edge that centres it vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.max_paddle_y() / 2.0
    }

    /// Clamp a paddle top edge into [0, H - paddle height]
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }
}

impl Default for Arena {
    fn default() -> Self {
        let width = Params::ARENA_MAX_WIDTH;
        let height = width * Params::ARENA_ASPECT;
        Self {
            width,
            height,
            paddle_height: height * Params::PADDLE_HEIGHT_FRACTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_paddle_height_is_fifth_of_height() {
        let arena = Arena::new(600.0, 360.0).unwrap();
        assert!((arena.paddle_height - 72.0).abs() < 1e-4);
    }

    #[test]
    fn test_arena_rejects_non_positive_size() {
        assert!(matches!(
            Arena::new(0.0, 100.0),
            Err(ArenaError::InvalidSize { .. })
        ));
        assert!(matches!(
            Arena::new(100.0, -1.0),
            Err(ArenaError::InvalidSize { .. })
        ));
        assert!(Arena::new(f32::NAN, 100.0).is_err());
    }

    #[test]
    fn test_arena_rejects_paddle_taller_than_arena() {
        assert_eq!(
            Arena::with_paddle_height(100.0, 50.0, 60.0),
            Err(ArenaError::PaddleTooTall {
                paddle_height: 60.0,
                height: 50.0
            })
        );
    }

    #[test]
    fn test_arena_from_viewport_caps_width() {
        let wide = Arena::from_viewport(2000.0).unwrap();
        assert_eq!(wide.width, 800.0);
        assert!((wide.height - 480.0).abs() < 1e-4);

        let narrow = Arena::from_viewport(400.0).unwrap();
        assert!((narrow.width - 360.0).abs() < 1e-4);
        assert!((narrow.height - 216.0).abs() < 1e-4);
    }

    #[test]
    fn test_arena_clamp_paddle_y() {
        let arena = Arena::new(600.0, 360.0).unwrap();
        assert_eq!(arena.clamp_paddle_y(-10.0), 0.0);
        assert_eq!(arena.clamp_paddle_y(1000.0), arena.max_paddle_y());
        assert_eq!(arena.clamp_paddle_y(100.0), 100.0);
    }

    #[test]
    fn test_arena_paddle_spawn_is_centred() {
        let arena = Arena::new(600.0, 360.0).unwrap();
        let top = arena.paddle_spawn_y();
        let centre = top + arena.paddle_height / 2.0;
        assert!((centre - arena.height / 2.0).abs() < 1e-4);
    }
}
