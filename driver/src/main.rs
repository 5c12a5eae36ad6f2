//! Headless run of the frame loop.
//!
//! Plays an AI match with a scripted left player, encodes every frame with
//! postcard as an out-of-process presenter would receive it, and runs
//! without any audio device.

use anyhow::Context;
use driver::{
    AudioBackend, AudioError, DriverConfig, DriverError, FrameDriver, InputSource, KeyboardState,
    Presenter, SystemEnv,
};
use proto::{Frame, HeldKeys, InputEvent, MatchMode, Sound};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

const DEMO_FRAMES: u64 = 60 * 30;

/// Left player that wanders up and down, changing direction at random
struct ScriptedPlayer {
    keyboard: KeyboardState,
    rng: StdRng,
    held: HeldKeys,
}

impl ScriptedPlayer {
    fn new(seed: u64) -> Self {
        let mut keyboard = KeyboardState::new();
        keyboard.push_event(InputEvent::SelectMode(MatchMode::Ai));
        keyboard.push_event(InputEvent::Start);
        Self {
            keyboard,
            rng: StdRng::seed_from_u64(seed),
            held: HeldKeys::none(),
        }
    }
}

impl InputSource for ScriptedPlayer {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        if self.rng.gen_bool(1.0 / 30.0) {
            let dir = self.rng.gen_range(-1..=1);
            self.held = HeldKeys {
                left_up: dir < 0,
                left_down: dir > 0,
                ..HeldKeys::none()
            };
        }
        self.keyboard.poll_events()
    }

    fn held_keys(&self) -> HeldKeys {
        self.held
    }
}

/// Encodes frames the way they would be sent to a remote renderer
#[derive(Default)]
struct EncodingPresenter {
    bytes_sent: usize,
}

impl Presenter for EncodingPresenter {
    fn present(&mut self, frame: &Frame) -> Result<(), DriverError> {
        let bytes = frame.to_bytes()?;
        self.bytes_sent += bytes.len();
        Ok(())
    }
}

/// No audio device in headless mode
struct SilentAudio;

impl AudioBackend for SilentAudio {
    type Handle = ();

    fn load_sound(&mut self, sound: Sound) -> Result<(), AudioError> {
        Err(AudioError::SoundNotFound(sound))
    }

    fn load_music(&mut self) -> Result<(), AudioError> {
        Err(AudioError::DeviceUnavailable)
    }

    fn play(&mut self, _handle: &()) -> Result<(), AudioError> {
        Err(AudioError::DeviceUnavailable)
    }

    fn start_music(&mut self) -> Result<(), AudioError> {
        Err(AudioError::DeviceUnavailable)
    }

    fn stop_music(&mut self) {}
    fn pause_music(&mut self) {}
    fn resume_music(&mut self) {}
    fn set_music_volume(&mut self, _volume: f32) {}
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,game_core=debug")),
        )
        .init();

    let config = DriverConfig {
        max_frames: Some(DEMO_FRAMES),
        ..DriverConfig::default()
    };
    let seed = config.seed;

    let mut driver = FrameDriver::new(
        config,
        SystemEnv::new(),
        ScriptedPlayer::new(seed),
        EncodingPresenter::default(),
        SilentAudio,
    );
    let summary = driver.run().context("frame loop failed")?;

    tracing::info!(
        frames = summary.frames,
        left = summary.score.left,
        right = summary.score.right,
        state = ?summary.state,
        bytes = driver.presenter().bytes_sent,
        "headless match finished"
    );
    Ok(())
}
