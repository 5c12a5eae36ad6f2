/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixels)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    // Timing
    pub const FPS: u32 = 60;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 6.0; // pixels per tick
    pub const PADDLE_MARGIN: f32 = 40.0; // gap between paddle and side edge
    pub const AI_SPEED_PENALTY: f32 = 2.0;

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 6.0; // pixels per tick
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    pub const LAUNCH_SPREAD: f32 = std::f32::consts::FRAC_PI_4;

    // Score
    pub const WIN_SCORE: u32 = 5;

    // Music
    pub const MUSIC_VOLUME: f32 = 0.4;
    pub const DUCK_VOLUME: f32 = 0.05;
    pub const MUTED_VOLUME: f32 = 0.0;
    pub const DUCK_MS: u32 = 300;
}
