//! Core logic for the phonics learning player.
//!
//! Everything in this crate is synchronous and deterministic: the content
//! catalogs, the shuffle sequencer, the session state machine (a pure
//! transition function that returns explicit actions for the host to
//! interpret), the swipe/tap-zone gesture router, the keyboard command
//! mapping, the player settings model, and the voice-activation level
//! detector. Timers, audio and speech live in the companion player crate.

pub mod catalog;
pub mod gesture;
pub mod input;
pub mod sequencer;
pub mod session;
pub mod settings;
pub mod voice;

pub use catalog::{AssetRef, Catalog, CatalogError, Item, Part};
pub use gesture::{Point, SwipeDirection, SwipeTracker, TapZone};
pub use input::Key;
pub use sequencer::ShuffleSequencer;
pub use session::{
    Action, Direction, Narration, NarrationKind, Phase, RevealBehavior, SessionEvent,
    SessionInput, SessionMachine, SessionProfile, TimerKey,
};
pub use settings::{Loops, PlayerSettings, PlaybackSpeed, SessionMode};
pub use voice::{LevelDetector, VoiceActivationConfig};
