use crate::Side;

/// Simulation clock, advanced once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub tick: u64,   // Ticks since the match was created
    pub now_ms: u64, // Simulated milliseconds since the match was created
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, fps: u32) {
        self.tick += 1;
        self.now_ms = self.tick * 1000 / fps as u64;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
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

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Left leads only on a strictly higher score
    pub fn leader(&self) -> Side {
        if self.left > self.right {
            Side::Left
        } else {
            Side::Right
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

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub scored: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.scored = None;
    }
}

/// Window during which the music stays lowered after a hit cue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuckWindow {
    until_ms: Option<u64>,
}

impl DuckWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (or extend) the window so it ends `duration_ms` after `now_ms`
    pub fn open(&mut self, now_ms: u64, duration_ms: u32) {
        self.until_ms = Some(now_ms + duration_ms as u64);
    }

    pub fn close(&mut self) {
        self.until_ms = None;
    }

    pub fn is_open(&self) -> bool {
        self.until_ms.is_some()
    }

    pub fn ends_at(&self) -> Option<u64> {
        self.until_ms
    }

    pub fn expired(&self, now_ms: u64) -> bool {
        self.until_ms.is_some_and(|until| now_ms >= until)
    }
}
