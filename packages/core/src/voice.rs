//! Voice-activation level detection.
//!
//! A pure detector over audio level frames: a burst of sound followed by
//! a silence window produces exactly one detection edge, after which the
//! detector stays quiet for a re-arm delay. Microphone capture and
//! permission handling are host concerns; when the microphone is denied
//! the feature is simply never fed and stays disabled.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct VoiceActivationConfig {
    /// Mean absolute amplitude above which a frame counts as sound.
    pub sound_threshold: f32,
    /// Quiet time after a burst before the burst counts as finished.
    pub silence_window: Duration,
    /// Time after a detection before listening resumes.
    pub rearm_delay: Duration,
}

impl Default for VoiceActivationConfig {
    fn default() -> Self {
        Self {
            sound_threshold: 0.1,
            silence_window: Duration::from_millis(200),
            rearm_delay: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Armed,
    InSound,
    Cooldown,
}

/// Feed with one level per frame (see [`frame_level`]) and a monotonic
/// timestamp; returns `true` on the single frame that completes a burst.
#[derive(Debug)]
pub struct LevelDetector {
    config: VoiceActivationConfig,
    state: State,
    /// Last frame above the threshold.
    last_sound: Duration,
    /// End of the current cooldown.
    rearm_at: Duration,
}

impl LevelDetector {
    pub fn new(config: VoiceActivationConfig) -> Self {
        Self {
            config,
            state: State::Armed,
            last_sound: Duration::ZERO,
            rearm_at: Duration::ZERO,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.state != State::Cooldown
    }

    pub fn process(&mut self, level: f32, now: Duration) -> bool {
        if self.state == State::Cooldown {
            if now < self.rearm_at {
                return false;
            }
            self.state = State::Armed;
        }

        let loud = level > self.config.sound_threshold;
        match self.state {
            State::Armed => {
                if loud {
                    self.state = State::InSound;
                    self.last_sound = now;
                }
                false
            }
            State::InSound => {
                if loud {
                    self.last_sound = now;
                    false
                } else if now.saturating_sub(self.last_sound) >= self.config.silence_window {
                    self.state = State::Cooldown;
                    self.rearm_at = now + self.config.rearm_delay;
                    true
                } else {
                    false
                }
            }
            State::Cooldown => false,
        }
    }
}

/// Mean absolute amplitude of a sample frame, the level measure the
/// detector expects.
pub fn frame_level(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|s| s.abs()).sum::<f32>() / samples.len() as f32
}
