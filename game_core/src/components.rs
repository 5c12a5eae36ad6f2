use crate::{Config, GameRng, Rect};
use glam::Vec2;

/// Which end of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            rect: config.paddle_spawn(side),
        }
    }

    pub fn center_y(&self) -> f32 {
        self.rect.center().y
    }

    /// Move vertically by `dy`, keeping the paddle on screen
    pub fn shift(&mut self, dy: f32, config: &Config) {
        self.rect.pos.y = config.clamp_paddle_top(self.rect.pos.y + dy);
    }

    pub fn recenter(&mut self, config: &Config) {
        self.rect = config.paddle_spawn(self.side);
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per tick
    pub vel: Vec2,
}

impl Ball {
    pub fn new(rect: Rect, vel: Vec2) -> Self {
        Self { rect, vel }
    }

    /// Stationary ball at its pre-serve position
    pub fn at_spawn(config: &Config) -> Self {
        Self::new(config.ball_spawn(), Vec2::ZERO)
    }

    pub fn advance(&mut self) {
        self.rect.pos += self.vel;
    }

    /// Re-center the ball and launch it with a random angle and direction
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.rect.set_center(config.center());

        let spread = config.launch_spread;
        let angle: f32 = rng.0.gen_range(-spread..=spread);
        let direction = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };

        self.vel = Vec2::new(
            direction * config.ball_speed * angle.cos(),
            config.ball_speed * angle.sin(),
        );
    }

    /// Park the ball at its spawn point with no velocity
    pub fn stop(&mut self, config: &Config) {
        *self = Self::at_spawn(config);
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
    pub speed: f32,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toward(dir: i8, speed: f32) -> Self {
        Self { dir, speed }
    }

    pub fn idle() -> Self {
        Self::default()
    }
}
