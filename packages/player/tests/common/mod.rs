//! Shared narration doubles for the integration tests.

use std::sync::Arc;

use parking_lot::Mutex;
use phonics_core::AssetRef;
use phonics_player::{ClipPlayer, CompletionSender, SpeechEngine, Utterance};

/// Records every utterance and completes it immediately.
#[derive(Default)]
pub struct RecordingEngine {
    pub spoken: Arc<Mutex<Vec<String>>>,
}

impl RecordingEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().clone()
    }
}

impl SpeechEngine for RecordingEngine {
    fn speak(&self, utterance: Utterance, done: CompletionSender) {
        self.spoken.lock().push(utterance.text);
        done.finished();
    }

    fn stop(&self) {}
}

/// Holds every utterance open until the test resolves it. `stop` is
/// deliberately lazy: pending completions survive and fire late, which
/// is exactly what the stale-completion guard has to absorb.
#[derive(Default)]
pub struct LaggyEngine {
    pending: Mutex<Vec<(String, CompletionSender)>>,
}

impl LaggyEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn pending_len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn resolve_all(&self) {
        for (_, done) in self.pending.lock().drain(..) {
            done.finished();
        }
    }
}

impl SpeechEngine for LaggyEngine {
    fn speak(&self, utterance: Utterance, done: CompletionSender) {
        self.pending.lock().push((utterance.text, done));
    }

    fn stop(&self) {}
}

/// Clip backend with no assets: every request fails, forcing the text
/// fallback chain.
#[derive(Default)]
pub struct MissingClips {
    pub attempted: Arc<Mutex<Vec<String>>>,
}

impl MissingClips {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl ClipPlayer for MissingClips {
    fn play(&self, clip: &AssetRef, done: CompletionSender) {
        self.attempted.lock().push(clip.as_str().to_string());
        done.failed();
    }

    fn stop(&self) {}
}
