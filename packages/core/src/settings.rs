//! The player settings model. Persistence lives in the player crate;
//! this module owns the shape, the defaults, and the tolerant merge used
//! when loading a possibly partial or stale settings document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    #[default]
    Drill,
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl PlaybackSpeed {
    /// Speech rate multiplier handed to the narration engine.
    pub fn rate(&self) -> f32 {
        match self {
            Self::Slow => 0.6,
            Self::Medium => 0.8,
            Self::Fast => 1.0,
        }
    }
}

/// How many times a drill pass repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Loops {
    #[default]
    One,
    Three,
    Five,
    Infinite,
}

impl Loops {
    /// `None` means repeat forever.
    pub fn count(&self) -> Option<u32> {
        match self {
            Self::One => Some(1),
            Self::Three => Some(3),
            Self::Five => Some(5),
            Self::Infinite => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerSettings {
    /// Identifier of the selected deck.
    pub selected_deck: String,
    pub mode: SessionMode,
    pub speed: PlaybackSpeed,
    pub loops: Loops,
    /// Quiet mode suppresses auto-narration; the visual flow is
    /// unaffected.
    pub quiet: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            selected_deck: "letters-full".to_string(),
            mode: SessionMode::default(),
            speed: PlaybackSpeed::default(),
            loops: Loops::default(),
            quiet: false,
        }
    }
}

impl PlayerSettings {
    /// Parse a settings document, filling missing or unreadable fields
    /// from the defaults. A completely unreadable document yields the
    /// defaults; loading never fails.
    pub fn from_json_lossy(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
