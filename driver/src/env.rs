use std::time::{Duration, Instant};

/// Abstract environment (clock and sleeping) so the loop can run under test
pub trait Environment {
    /// Time elapsed since the environment was created
    fn now(&self) -> Duration;
    fn sleep(&self, duration: Duration);
}

/// Wall clock with spin-assisted sleeping for steady frame pacing
pub struct SystemEnv {
    start: Instant,
    sleeper: spin_sleep::SpinSleeper,
}

impl SystemEnv {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            sleeper: spin_sleep::SpinSleeper::default(),
        }
    }
}

impl Default for SystemEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SystemEnv {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeper.sleep(duration);
    }
}
