//! Content catalogs consumed by the session player.
//!
//! Catalogs are static, read-only tables built once per screen. The player
//! never mutates an [`Item`]; all per-session progress (completed parts,
//! reveal state) lives in the session state machine.

pub mod animals;
pub mod families;
pub mod letters;
pub mod numbers;
pub mod sentences;
pub mod vocab;

pub use families::CvcFamily;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque reference to a playable or displayable asset (path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef(pub String);

impl AssetRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tappable sub-unit of an [`Item`]: a phoneme, syllable chunk or noun.
///
/// Completion is session state, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Display text ("C", "AT", "PHANT").
    pub text: String,
    /// Pronunciation override used when no clip is available.
    pub tts: Option<String>,
    /// Recorded audio for this part.
    pub clip: Option<AssetRef>,
}

impl Part {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tts: None,
            clip: None,
        }
    }

    pub fn with_tts(mut self, tts: impl Into<String>) -> Self {
        self.tts = Some(tts.into());
        self
    }

    pub fn with_clip(mut self, clip: AssetRef) -> Self {
        self.clip = Some(clip);
        self
    }
}

/// One unit of learnable content: a letter, word, number, sentence or
/// animal breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier within the catalog.
    pub id: String,
    /// Primary display text.
    pub display: String,
    /// Narrated-text override (e.g. Zebra is spoken "Zeebra").
    pub tts: Option<String>,
    /// Recorded audio for the whole item.
    pub clip: Option<AssetRef>,
    /// Image revealed alongside or after narration.
    pub image: Option<AssetRef>,
    /// Tappable sub-units; empty for plain letters/vocab/numbers.
    pub parts: Vec<Part>,
    /// Narration spoken once every part has been confirmed
    /// ("C... at... Cat").
    pub completion_tts: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
            tts: None,
            clip: None,
            image: None,
            parts: Vec::new(),
            completion_tts: None,
        }
    }

    pub fn with_tts(mut self, tts: impl Into<String>) -> Self {
        self.tts = Some(tts.into());
        self
    }

    pub fn with_clip(mut self, clip: AssetRef) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn with_image(mut self, image: AssetRef) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_parts(mut self, parts: Vec<Part>) -> Self {
        self.parts = parts;
        self
    }

    pub fn with_completion_tts(mut self, tts: impl Into<String>) -> Self {
        self.completion_tts = Some(tts.into());
        self
    }

    /// Text spoken for this item when no clip is available.
    pub fn spoken_text(&self) -> &str {
        self.tts.as_deref().unwrap_or(&self.display)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog {0:?} has no items")]
    Empty(String),
}

/// An ordered, immutable set of items for one learning screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub id: String,
    pub name: String,
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        items: Vec<Item>,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        if items.is_empty() {
            return Err(CatalogError::Empty(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            items,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// First item whose display text starts with `prefix`, ignoring case.
    /// Drives the letter-key jump on the keyboard.
    pub fn find_by_prefix(&self, prefix: char) -> Option<usize> {
        let needle = prefix.to_ascii_lowercase();
        self.items.iter().position(|item| {
            item.display
                .chars()
                .next()
                .map(|c| c.to_ascii_lowercase() == needle)
                .unwrap_or(false)
        })
    }

    /// First item whose display text equals `text` exactly. Drives the
    /// digit-key jump on the numbers screen.
    pub fn find_by_display(&self, text: &str) -> Option<usize> {
        self.items.iter().position(|item| item.display == text)
    }
}
