//! Frame driver for the Pong simulation.
//!
//! Pulls input, ticks the [`game_core::Match`] at a fixed rate, hands each
//! frame's draw commands to a [`Presenter`] and routes its audio commands
//! through an [`AudioRouter`].

pub mod audio;
pub mod config;
pub mod env;
pub mod error;
pub mod frame_driver;
pub mod input;

pub use audio::{AudioBackend, AudioRouter};
pub use config::DriverConfig;
pub use env::{Environment, SystemEnv};
pub use error::{AudioError, DriverError};
pub use frame_driver::{FrameDriver, Presenter, RunSummary};
pub use input::{InputSource, KeyboardState};
