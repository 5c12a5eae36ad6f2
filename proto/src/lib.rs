//! Input events and output commands exchanged between the Pong core and its
//! presentation layer.
//!
//! The core never touches a window, an audio device or the keyboard. It
//! consumes [`InputEvent`]s and [`HeldKeys`] snapshots and produces
//! [`OutputCommand`]s. A [`Frame`] bundles one tick's commands and uses
//! postcard for compact binary serialization when the presenter lives in
//! another process.

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

// ============================================================================
// Input (consumed by the core)
// ============================================================================

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchMode {
    /// Single human against the reactive AI
    #[default]
    Ai,
    /// Two humans sharing the keyboard
    TwoPlayer,
}

/// Edge-triggered input, one per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Start,
    PauseToggle,
    Reset,
    MuteToggle,
    SelectMode(MatchMode),
    Quit,
}

/// Level-triggered paddle keys, sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl HeldKeys {
    pub fn none() -> Self {
        Self::default()
    }

    /// Direction for the left paddle: -1 = up, 0 = stop, 1 = down
    pub fn left_dir(&self) -> i8 {
        self.left_down as i8 - self.left_up as i8
    }

    /// Direction for the right paddle: -1 = up, 0 = stop, 1 = down
    pub fn right_dir(&self) -> i8 {
        self.right_down as i8 - self.right_up as i8
    }
}

// ============================================================================
// Output (produced by the core)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const GREEN: Color = Color(0, 255, 0);
    pub const RED: Color = Color(255, 60, 60);
    pub const GRAY: Color = Color(150, 150, 150);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    Big,
    Medium,
    Small,
}

/// Screen-space rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        rect: DrawRect,
        color: Color,
    },
    /// Ellipse inscribed in `rect`
    Ellipse {
        rect: DrawRect,
        color: Color,
    },
    Text {
        text: String,
        size: FontSize,
        color: Color,
        x: f32,
        y: f32,
    },
}

/// Named sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    Hit,
    Score,
    GameOver,
}

impl Sound {
    pub const ALL: [Sound; 3] = [Sound::Hit, Sound::Score, Sound::GameOver];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AudioCommand {
    PlaySound(Sound),
    /// Start the background loop from the beginning
    StartMusic,
    StopMusic,
    PauseMusic,
    ResumeMusic,
    SetMusicVolume(f32),
    /// Lower the music so a cue is audible; the core restores the volume
    /// with a later `SetMusicVolume`
    DuckMusic { duration_ms: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputCommand {
    Draw(DrawCommand),
    Audio(AudioCommand),
    /// The player asked to quit; the driver should stop its loop
    Shutdown,
}

impl OutputCommand {
    pub fn as_audio(&self) -> Option<AudioCommand> {
        match self {
            OutputCommand::Audio(cmd) => Some(*cmd),
            _ => None,
        }
    }

    pub fn as_draw(&self) -> Option<&DrawCommand> {
        match self {
            OutputCommand::Draw(cmd) => Some(cmd),
            _ => None,
        }
    }
}

impl From<DrawCommand> for OutputCommand {
    fn from(cmd: DrawCommand) -> Self {
        OutputCommand::Draw(cmd)
    }
}

impl From<AudioCommand> for OutputCommand {
    fn from(cmd: AudioCommand) -> Self {
        OutputCommand::Audio(cmd)
    }
}

/// All commands produced during one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub commands: Vec<OutputCommand>,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Frame {
    pub fn new(tick: u64, commands: Vec<OutputCommand>) -> Self {
        Self { tick, commands }
    }

    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }

    pub fn draw_commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter_map(OutputCommand::as_draw)
    }

    pub fn audio_commands(&self) -> impl Iterator<Item = AudioCommand> + '_ {
        self.commands.iter().filter_map(OutputCommand::as_audio)
    }

    pub fn requests_shutdown(&self) -> bool {
        self.commands
            .iter()
            .any(|cmd| matches!(cmd, OutputCommand::Shutdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_held_keys_direction() {
        let keys = HeldKeys {
            left_up: true,
            right_down: true,
            ..HeldKeys::none()
        };
        assert_eq!(keys.left_dir(), -1);
        assert_eq!(keys.right_dir(), 1);

        let both = HeldKeys {
            left_up: true,
            left_down: true,
            ..HeldKeys::none()
        };
        assert_eq!(both.left_dir(), 0, "Opposing keys cancel out");
    }

    #[test]
    fn test_frame_serialization() {
        let frame = Frame::new(
            42,
            vec![
                DrawCommand::Clear(Color::BLACK).into(),
                DrawCommand::Text {
                    text: "PAUSED".to_string(),
                    size: FontSize::Big,
                    color: Color::WHITE,
                    x: 340.0,
                    y: 260.0,
                }
                .into(),
                AudioCommand::DuckMusic { duration_ms: 300 }.into(),
                OutputCommand::Shutdown,
            ],
        );
        let bytes = frame.to_bytes().expect("Serialization should succeed");
        let decoded = Frame::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_frame_splits_commands() {
        let frame = Frame::new(
            1,
            vec![
                AudioCommand::PlaySound(Sound::Hit).into(),
                DrawCommand::Clear(Color::BLACK).into(),
                AudioCommand::StopMusic.into(),
            ],
        );
        assert_eq!(frame.draw_commands().count(), 1);
        assert_eq!(
            frame.audio_commands().collect::<Vec<_>>(),
            vec![
                AudioCommand::PlaySound(Sound::Hit),
                AudioCommand::StopMusic
            ]
        );
        assert!(!frame.requests_shutdown());
    }

    #[test]
    fn test_truncated_frame_fails_to_decode() {
        let frame = Frame::new(7, vec![AudioCommand::StartMusic.into()]);
        let bytes = frame.to_bytes().expect("Serialization should succeed");
        assert!(Frame::from_bytes(&bytes[..bytes.len() - 1]).is_err());
    }
}
