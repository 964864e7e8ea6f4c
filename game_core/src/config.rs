use crate::{Arena, Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_speed: f32,
    pub ai_dead_zone: f32,
    pub ai_speed_factor: f32,
    pub touch_sensitivity: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_serve_vertical_factor: f32,
    pub ball_deflection_factor: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_speed: Params::PADDLE_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            touch_sensitivity: Params::TOUCH_SENSITIVITY,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_serve_vertical_factor: Params::BALL_SERVE_VERTICAL_FACTOR,
            ball_deflection_factor: Params::BALL_DEFLECTION_FACTOR,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge X of a paddle. Paddles sit flush against their goal line.
    pub fn paddle_x(&self, side: Side, arena: &Arena) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => arena.width - self.paddle_width,
        }
    }

    /// AI paddle speed per frame
    pub fn ai_paddle_speed(&self) -> f32 {
        self.paddle_speed * self.ai_speed_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        let arena = Arena::new(600.0, 360.0).unwrap();
        assert_eq!(config.paddle_x(Side::Left, &arena), 0.0, "Left paddle X");
        assert_eq!(
            config.paddle_x(Side::Right, &arena),
            590.0,
            "Right paddle X"
        );
    }

    #[test]
    fn test_config_ai_speed() {
        let config = Config::new();
        assert!((config.ai_paddle_speed() - 4.8).abs() < 1e-5);
    }
}
