//! Pausable playback of sorting steps.

mod controller;
mod state;

pub use controller::{PlaybackController, PlaybackSettings};
pub use state::PlaybackState;
