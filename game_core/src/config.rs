use crate::{Rect, Side};
use glam::Vec2;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub fps: u32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ai_speed_penalty: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub max_bounce_angle: f32,
    pub launch_spread: f32,
    pub win_score: u32,
    pub music_volume: f32,
    pub duck_volume: f32,
    pub muted_volume: f32,
    pub duck_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::WIDTH,
            height: Params::HEIGHT,
            fps: Params::FPS,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ai_speed_penalty: Params::AI_SPEED_PENALTY,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            launch_spread: Params::LAUNCH_SPREAD,
            win_score: Params::WIN_SCORE,
            music_volume: Params::MUSIC_VOLUME,
            duck_volume: Params::DUCK_VOLUME,
            muted_volume: Params::MUTED_VOLUME,
            duck_ms: Params::DUCK_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center of the playfield
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Get left edge X for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Paddle rectangle at its starting (vertically centered) position
    pub fn paddle_spawn(&self, side: Side) -> Rect {
        Rect::new(
            self.paddle_x(side),
            self.height / 2.0 - self.paddle_height / 2.0,
            self.paddle_width,
            self.paddle_height,
        )
    }

    /// Ball rectangle before the first serve: top-left at the playfield center
    pub fn ball_spawn(&self) -> Rect {
        let center = self.center();
        Rect::new(center.x, center.y, self.ball_size, self.ball_size)
    }

    /// Clamp a paddle's top edge so the whole paddle stays on screen
    pub fn clamp_paddle_top(&self, y: f32) -> f32 {
        y.clamp(0.0, self.height - self.paddle_height)
    }

    /// Per-tick step of the AI paddle
    pub fn ai_speed(&self) -> f32 {
        self.paddle_speed - self.ai_speed_penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 40.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 740.0, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_spawn_is_vertically_centered() {
        let config = Config::new();
        let rect = config.paddle_spawn(Side::Right);
        assert_eq!(rect.top(), 250.0);
        assert_eq!(rect.center().y, config.height / 2.0);
    }

    #[test]
    fn test_config_clamp_paddle_top() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_top(-5.0), 0.0);
        assert_eq!(
            config.clamp_paddle_top(1000.0),
            config.height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_top(120.0), 120.0);
    }

    #[test]
    fn test_config_ai_is_slower_than_player() {
        let config = Config::new();
        assert_eq!(config.ai_speed(), 4.0);
    }
}
