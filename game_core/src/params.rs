/// Game tuning parameters for Pong
///
/// Distances are in canvas pixels, speeds in pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_MAX_WIDTH: f32 = 800.0;
    pub const ARENA_VIEWPORT_FRACTION: f32 = 0.9; // Share of the window width used
    pub const ARENA_ASPECT: f32 = 0.6; // Height = width * aspect

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT_FRACTION: f32 = 0.2; // Of arena height
    pub const PADDLE_SPEED: f32 = 6.0;

    // AI paddle
    pub const AI_DEAD_ZONE: f32 = 35.0;
    pub const AI_SPEED_FACTOR: f32 = 0.8; // Slightly slower than the player

    // Touch
    pub const TOUCH_SENSITIVITY: f32 = 1.5;

    // Ball
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0;
    pub const BALL_SERVE_VERTICAL_FACTOR: f32 = 0.5; // Shallower than horizontal
    pub const BALL_DEFLECTION_FACTOR: f32 = 0.3; // vy per pixel off paddle centre

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins
}
