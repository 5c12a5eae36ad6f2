use crate::audio::{AudioBackend, AudioRouter};
use crate::config::DriverConfig;
use crate::env::Environment;
use crate::error::DriverError;
use crate::input::InputSource;
use game_core::{Match, MatchState, Score};
use proto::{Frame, OutputCommand};

/// Receives each frame's commands, usually to draw them
pub trait Presenter {
    fn present(&mut self, frame: &Frame) -> Result<(), DriverError>;
}

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub state: MatchState,
    pub score: Score,
    pub quit: bool,
}

/// Fixed-rate loop: input, tick, present, audio, sleep.
///
/// Owns the match, so the simulation only ever runs on the thread that
/// calls [`FrameDriver::run`].
pub struct FrameDriver<E, I, P, B>
where
    E: Environment,
    I: InputSource,
    P: Presenter,
    B: AudioBackend,
{
    env: E,
    input: I,
    presenter: P,
    audio: AudioRouter<B>,
    game: Match,
    config: DriverConfig,
    frames: u64,
}

impl<E, I, P, B> FrameDriver<E, I, P, B>
where
    E: Environment,
    I: InputSource,
    P: Presenter,
    B: AudioBackend,
{
    pub fn new(config: DriverConfig, env: E, input: I, presenter: P, backend: B) -> Self {
        Self {
            env,
            input,
            presenter,
            audio: AudioRouter::new(backend, &config.game),
            game: Match::with_config(config.game.clone(), config.seed),
            config,
            frames: 0,
        }
    }

    /// Run until quit or until `max_frames` frames have been presented
    pub fn run(&mut self) -> Result<RunSummary, DriverError> {
        tracing::info!(fps = self.config.fps(), seed = self.config.seed, "frame loop started");

        let mut quit = false;
        while self.config.max_frames.map_or(true, |max| self.frames < max) {
            if !self.run_frame()? {
                quit = true;
                break;
            }
        }

        let summary = self.summary(quit);
        tracing::info!(
            frames = summary.frames,
            left = summary.score.left,
            right = summary.score.right,
            state = ?summary.state,
            "frame loop finished"
        );
        Ok(summary)
    }

    /// Run a single frame. Returns `false` once shutdown was requested.
    pub fn run_frame(&mut self) -> Result<bool, DriverError> {
        let frame_start = self.env.now();

        let mut commands = Vec::new();
        for event in self.input.poll_events() {
            tracing::trace!(?event, "input");
            commands.extend(self.game.apply_discrete_event(event));
        }

        let shutdown = commands.contains(&OutputCommand::Shutdown);
        if !shutdown {
            commands.extend(self.game.tick(self.input.held_keys()));
        }

        let frame = Frame::new(self.game.tick_count(), commands);
        self.presenter.present(&frame)?;
        for cmd in frame.audio_commands() {
            self.audio.handle(cmd);
        }
        self.frames += 1;

        if shutdown {
            tracing::info!(tick = frame.tick, "shutdown requested");
            return Ok(false);
        }

        let elapsed = self.env.now().saturating_sub(frame_start);
        let budget = self.config.frame_duration();
        if elapsed < budget {
            self.env.sleep(budget - elapsed);
        }

        Ok(true)
    }

    pub fn summary(&self, quit: bool) -> RunSummary {
        RunSummary {
            frames: self.frames,
            state: self.game.state(),
            score: self.game.score(),
            quit,
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn audio(&self) -> &AudioRouter<B> {
        &self.audio
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
