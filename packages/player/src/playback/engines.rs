//! Bundled narration engines.
//!
//! Real hosts plug a platform speech engine and asset player in through
//! the [`SpeechEngine`]/[`ClipPlayer`] traits; the engines here cover
//! hosts without audio (everything resolves immediately, the visual flow
//! continues) and the terminal demo (narration is printed and completes
//! after a reading-time delay).

use std::time::Duration;

use phonics_core::AssetRef;
use tracing::info;

use super::{ClipPlayer, CompletionSender, PlaybackEnd, SpeechEngine, Utterance, VoiceInfo};

/// The engine-unavailable path: every request resolves immediately so
/// calling sequences are never blocked by missing audio support.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEngine;

impl SpeechEngine for NullEngine {
    fn speak(&self, _utterance: Utterance, done: CompletionSender) {
        done.finished();
    }

    fn stop(&self) {}
}

impl ClipPlayer for NullEngine {
    /// No asset backend: report failure so the controller's text
    /// fallback gets its chance.
    fn play(&self, _clip: &AssetRef, done: CompletionSender) {
        done.failed();
    }

    fn stop(&self) {}
}

/// Terminal narration for the demo binary: prints what would be spoken
/// and resolves after a delay proportional to the text length and the
/// speech rate. Cancellation is the controller's generation guard; a
/// late resolve of a superseded utterance is discarded there.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleEngine;

/// Base pause plus per-character reading time at rate 1.0.
const BASE_DELAY: Duration = Duration::from_millis(250);
const PER_CHAR: Duration = Duration::from_millis(45);

impl ConsoleEngine {
    fn reading_time(text: &str, rate: f32) -> Duration {
        let chars = text.chars().count() as u32;
        let nominal = BASE_DELAY + PER_CHAR * chars;
        nominal.div_f32(rate.clamp(0.25, 4.0))
    }
}

impl SpeechEngine for ConsoleEngine {
    fn voices(&self) -> Vec<VoiceInfo> {
        vec![VoiceInfo {
            id: "console".to_string(),
            name: "Console".to_string(),
            language: "en-US".to_string(),
        }]
    }

    fn speak(&self, utterance: Utterance, done: CompletionSender) {
        info!(text = %utterance.text, rate = utterance.params.rate, "speak");
        print!("  \u{1f5e3} {}\r\n", utterance.text);
        let delay = Self::reading_time(&utterance.text, utterance.params.rate);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            done.resolve(PlaybackEnd::Finished);
        });
    }

    fn stop(&self) {}
}

impl ClipPlayer for ConsoleEngine {
    fn play(&self, clip: &AssetRef, done: CompletionSender) {
        info!(clip = %clip, "play clip");
        print!("  \u{1f50a} {clip}\r\n");
        tokio::spawn(async move {
            tokio::time::sleep(BASE_DELAY).await;
            done.resolve(PlaybackEnd::Finished);
        });
    }

    fn stop(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_time_scales_with_length_and_rate() {
        let short = ConsoleEngine::reading_time("Cat", 1.0);
        let long = ConsoleEngine::reading_time("C... at... Cat", 1.0);
        assert!(long > short);
        let slow = ConsoleEngine::reading_time("Cat", 0.5);
        assert!(slow > short);
    }

    #[tokio::test]
    async fn null_engine_resolves_immediately() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        NullEngine.speak(
            Utterance {
                text: "Ah".to_string(),
                params: Default::default(),
            },
            CompletionSender(tx),
        );
        assert_eq!(rx.await.unwrap(), PlaybackEnd::Finished);
    }
}
