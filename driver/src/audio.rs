//! Audio routing for the frame driver.
//!
//! The simulation only emits [`AudioCommand`]s. The router turns them into
//! calls on a backend and absorbs every failure: a cue that fails to load is
//! left out for the rest of the process and playback errors are logged.

use crate::error::AudioError;
use game_core::Config;
use proto::{AudioCommand, Sound};
use std::collections::HashMap;

/// Platform audio device
pub trait AudioBackend {
    type Handle;

    fn load_sound(&mut self, sound: Sound) -> Result<Self::Handle, AudioError>;
    fn load_music(&mut self) -> Result<(), AudioError>;
    fn play(&mut self, handle: &Self::Handle) -> Result<(), AudioError>;

    fn start_music(&mut self) -> Result<(), AudioError>;
    fn stop_music(&mut self);
    fn pause_music(&mut self);
    fn resume_music(&mut self);
    fn set_music_volume(&mut self, volume: f32);
}

/// Dispatches audio commands to a backend, tolerating missing assets
pub struct AudioRouter<B: AudioBackend> {
    backend: B,
    sounds: HashMap<Sound, B::Handle>,
    music_loaded: bool,
    duck_volume: f32,
}

impl<B: AudioBackend> AudioRouter<B> {
    /// Load every cue and the music track up front. Music starts out at the
    /// configured volume.
    pub fn new(mut backend: B, config: &Config) -> Self {
        let mut sounds = HashMap::new();
        for sound in Sound::ALL {
            match backend.load_sound(sound) {
                Ok(handle) => {
                    sounds.insert(sound, handle);
                }
                Err(e) => tracing::warn!(?sound, error = %e, "sound unavailable, cue disabled"),
            }
        }

        let music_loaded = match backend.load_music() {
            Ok(()) => {
                backend.set_music_volume(config.music_volume);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "music unavailable, playing without it");
                false
            }
        };

        Self {
            backend,
            sounds,
            music_loaded,
            duck_volume: config.duck_volume,
        }
    }

    pub fn has_sound(&self, sound: Sound) -> bool {
        self.sounds.contains_key(&sound)
    }

    pub fn has_music(&self) -> bool {
        self.music_loaded
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn handle(&mut self, cmd: AudioCommand) {
        match cmd {
            AudioCommand::PlaySound(sound) => {
                if let Some(handle) = self.sounds.get(&sound) {
                    if let Err(e) = self.backend.play(handle) {
                        tracing::warn!(?sound, error = %e, "failed to play sound");
                    }
                }
            }
            AudioCommand::StartMusic => {
                if self.music_loaded {
                    if let Err(e) = self.backend.start_music() {
                        tracing::warn!(error = %e, "failed to start music");
                    }
                }
            }
            AudioCommand::StopMusic if self.music_loaded => self.backend.stop_music(),
            AudioCommand::PauseMusic if self.music_loaded => self.backend.pause_music(),
            AudioCommand::ResumeMusic if self.music_loaded => self.backend.resume_music(),
            AudioCommand::SetMusicVolume(volume) if self.music_loaded => {
                self.backend.set_music_volume(volume)
            }
            // The restore comes back from the simulation as SetMusicVolume
            AudioCommand::DuckMusic { .. } if self.music_loaded => {
                self.backend.set_music_volume(self.duck_volume)
            }
            _ => {}
        }
    }
}
