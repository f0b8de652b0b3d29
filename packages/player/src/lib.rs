//! Asynchronous orchestration for the phonics learning player.
//!
//! The pure state machine, catalogs and gesture logic live in
//! `phonics-core`; this crate owns everything that touches time or
//! audio: the playback controller and its engine seams, the named timer
//! bank, the session driver event loop, the player event stream, and
//! settings persistence.

pub mod config;
pub mod driver;
pub mod events;
pub mod logging;
pub mod playback;
pub mod settings;
pub mod timers;

pub use driver::{SessionDriver, SessionHandle};
pub use events::{EventEnvelope, EventStream, PlayerEvent};
pub use playback::{
    ClipPlayer, CompletionSender, PlaybackController, PlaybackEnd, PlaybackHandle,
    PlaybackOutcome, SpeechEngine, SpeechParams, Utterance, VoiceInfo,
};
pub use timers::{TimerBank, TimerFire};
