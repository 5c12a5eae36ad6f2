use game_core::{Config, GameRng};
use std::time::Duration;

/// Frame driver configuration
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Match tuning; its `fps` also sets the frame pacing
    pub game: Config,
    /// Stop after this many frames; `None` runs until quit
    pub max_frames: Option<u64>,
    pub seed: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            game: Config::default(),
            max_frames: None,
            seed: GameRng::DEFAULT_SEED,
        }
    }
}

impl DriverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fps(&self) -> u32 {
        self.game.fps
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.game.fps as f64)
    }
}
