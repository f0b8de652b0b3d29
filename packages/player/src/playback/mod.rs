//! The playback controller: exactly one narration (recorded clip or
//! synthesized speech) is active at any instant.
//!
//! `play` stops whatever was playing first, then starts the new request;
//! that ordering is the correctness invariant that prevents overlapping
//! audio. Every start bumps a generation counter; a handle whose
//! generation is no longer current reports `Superseded`, so a late
//! completion can never leak into the session. Playback errors are
//! swallowed at this boundary: a missing asset falls back to speech when
//! a text alternative exists and otherwise completes silently, so the
//! visual flow never depends on audio success.

pub mod engines;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use phonics_core::{AssetRef, Narration, NarrationKind};
use tokio::sync::oneshot;
use tracing::{debug, trace};

// ==================== Engine seams ====================

/// How a single engine dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEnd {
    /// Natural end of playback.
    Finished,
    /// The engine could not play the request (missing asset, device
    /// error). Treated as non-fatal by the controller.
    Failed,
}

/// Resolved exactly once per engine dispatch. Dropping it unresolved is
/// allowed and reads as a cancelled dispatch.
pub struct CompletionSender(oneshot::Sender<PlaybackEnd>);

impl CompletionSender {
    pub fn resolve(self, end: PlaybackEnd) {
        let _ = self.0.send(end);
    }

    pub fn finished(self) {
        self.resolve(PlaybackEnd::Finished);
    }

    pub fn failed(self) {
        self.resolve(PlaybackEnd::Failed);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    /// BCP 47 language tag ("en-US").
    pub language: String,
}

/// Speech parameters. Rate and pitch are multipliers around the engine's
/// natural voice.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechParams {
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
    /// Engine voice id; `None` leaves the engine default.
    pub voice: Option<String>,
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            // A touch slower than natural, for early learners.
            rate: 0.8,
            pitch: 1.2,
            voice: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Utterance {
    pub text: String,
    pub params: SpeechParams,
}

/// A speech-synthesis capability. `stop` must cancel the current
/// utterance and clear anything the engine has queued, so nothing fires
/// after navigation.
pub trait SpeechEngine: Send + Sync {
    fn voices(&self) -> Vec<VoiceInfo> {
        Vec::new()
    }

    fn speak(&self, utterance: Utterance, done: CompletionSender);

    fn stop(&self);
}

/// A recorded-audio capability addressed by opaque asset references.
pub trait ClipPlayer: Send + Sync {
    fn play(&self, clip: &AssetRef, done: CompletionSender);

    fn stop(&self);
}

/// Prefer an English female voice, else the first English voice, else
/// leave the engine default.
pub fn pick_voice(voices: &[VoiceInfo], language: &str) -> Option<String> {
    let prefix = language.split('-').next().unwrap_or(language);
    let english: Vec<&VoiceInfo> = voices
        .iter()
        .filter(|v| v.language.starts_with(prefix))
        .collect();
    english
        .iter()
        .find(|v| v.name.contains("Female") || v.name.contains("Google"))
        .or_else(|| english.first())
        .map(|v| v.id.clone())
}

// ==================== Controller ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Playback ran to its end (possibly silently, after a swallowed
    /// error).
    Completed,
    /// A later `play` or `stop` took over before this one finished.
    Superseded,
}

/// Completion side of one `play` call.
pub struct PlaybackHandle {
    pub generation: u64,
    pub kind: NarrationKind,
    done: oneshot::Receiver<PlaybackEnd>,
    current: Arc<AtomicU64>,
}

impl PlaybackHandle {
    /// Wait for the playback to finish. Errors never surface here; a
    /// failed playback still completes. Callers must treat
    /// `Superseded` as "do nothing".
    pub async fn finished(self) -> PlaybackOutcome {
        let resolved = self.done.await.is_ok();
        if resolved && self.current.load(Ordering::SeqCst) == self.generation {
            PlaybackOutcome::Completed
        } else {
            PlaybackOutcome::Superseded
        }
    }
}

pub struct PlaybackController {
    speech: Arc<dyn SpeechEngine>,
    clips: Arc<dyn ClipPlayer>,
    generation: Arc<AtomicU64>,
}

impl PlaybackController {
    pub fn new(speech: Arc<dyn SpeechEngine>, clips: Arc<dyn ClipPlayer>) -> Self {
        Self {
            speech,
            clips,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Generation of the most recent `play`/`stop`. Delayed effects
    /// captured under an older generation are stale.
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// The engine voice matching the narration preference, if any.
    pub fn preferred_voice(&self, language: &str) -> Option<String> {
        pick_voice(&self.speech.voices(), language)
    }

    /// Stop whatever is playing, then start `narration`. The clip is
    /// tried first; on failure the narration text (if any) is spoken
    /// instead.
    pub fn play(&self, narration: Narration, params: &SpeechParams) -> PlaybackHandle {
        self.stop_engines();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(generation, kind = ?narration.kind, "playback start");

        let (done_tx, done_rx) = oneshot::channel();
        self.dispatch(&narration, params, generation, CompletionSender(done_tx));

        PlaybackHandle {
            generation,
            kind: narration.kind,
            done: done_rx,
            current: Arc::clone(&self.generation),
        }
    }

    /// Idempotent; safe when nothing is playing. Supersedes any pending
    /// completion.
    pub fn stop(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.stop_engines();
    }

    fn stop_engines(&self) {
        self.speech.stop();
        self.clips.stop();
    }

    fn dispatch(
        &self,
        narration: &Narration,
        params: &SpeechParams,
        generation: u64,
        done: CompletionSender,
    ) {
        let text = narration.text.clone();
        match &narration.clip {
            Some(clip) => {
                let (clip_tx, clip_rx) = oneshot::channel();
                self.clips.play(clip, CompletionSender(clip_tx));

                let speech = Arc::clone(&self.speech);
                let current = Arc::clone(&self.generation);
                let clip_ref = clip.clone();
                let params = params.clone();
                tokio::spawn(async move {
                    match clip_rx.await {
                        Ok(PlaybackEnd::Finished) => done.finished(),
                        Ok(PlaybackEnd::Failed) => {
                            // Asset missing: degrade to speech when a text
                            // alternative exists, and only while this
                            // playback is still the active one.
                            if current.load(Ordering::SeqCst) != generation {
                                return;
                            }
                            match text {
                                Some(text) => {
                                    debug!(clip = %clip_ref, "clip failed, falling back to speech");
                                    speech.speak(Utterance { text, params }, done);
                                }
                                None => done.finished(),
                            }
                        }
                        // Dispatch dropped by the engine: superseded.
                        Err(_) => {}
                    }
                });
            }
            None => match text {
                Some(text) => self.speech.speak(
                    Utterance {
                        text,
                        params: params.clone(),
                    },
                    done,
                ),
                // Nothing to play: resolve silently so sequences keep
                // moving.
                None => done.finished(),
            },
        }
    }
}
