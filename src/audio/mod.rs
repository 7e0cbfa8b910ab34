//! Fire-and-forget audio cues
//!
//! The engine depends on the [`AudioCue`] capability rather than on a
//! concrete backend, so tests can observe cues and headless environments can
//! run silent. [`CuePlayer`] is the rodio-backed implementation.

pub mod player;

pub use player::CuePlayer;

/// The two playback triggers the game produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The snake ate a food item
    Eat,
    /// A game ended
    GameOver,
}

/// Capability to play a cue without blocking.
///
/// Triggers carry no queuing or completion tracking; overlapping triggers
/// mix or restart per the backend's default behavior.
pub trait AudioCue {
    fn trigger(&self, cue: Cue);
}

/// No-op implementation for muted play and machines without an output device
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn trigger(&self, _cue: Cue) {}
}
