//! Error types for the frame driver.
//!
//! The simulation core never fails. Everything here belongs to the
//! presentation side of the loop.

use proto::Sound;

/// Errors that stop the frame loop
#[derive(thiserror::Error, Debug)]
pub enum DriverError {
    #[error("Presenter error: {0}")]
    Present(String),

    #[error("Frame encoding error: {0}")]
    Encode(#[from] postcard::Error),
}

/// Audio failures. These are logged and swallowed by the audio router; a
/// cue that fails to load stays absent for the rest of the process.
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("Audio device unavailable")]
    DeviceUnavailable,

    #[error("Sound asset not found: {0:?}")]
    SoundNotFound(Sound),

    #[error("Music asset not found")]
    MusicNotFound,
}
