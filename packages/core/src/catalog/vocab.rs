//! The first-words vocabulary deck: one word per item with an image
//! revealed after narration. Categories follow the dashboard ordering.

use serde::{Deserialize, Serialize};

use super::{AssetRef, Catalog, Item};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabCategory {
    Animals,
    Things,
    Nature,
    Vehicles,
    People,
}

impl VocabCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Things => "things",
            Self::Nature => "nature",
            Self::Vehicles => "vehicles",
            Self::People => "people",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "animals" => Some(Self::Animals),
            "things" => Some(Self::Things),
            "nature" => Some(Self::Nature),
            "vehicles" => Some(Self::Vehicles),
            "people" => Some(Self::People),
            _ => None,
        }
    }
}

/// Display order of the category sections.
pub const CATEGORY_ORDER: [VocabCategory; 5] = [
    VocabCategory::Animals,
    VocabCategory::Things,
    VocabCategory::Nature,
    VocabCategory::Vehicles,
    VocabCategory::People,
];

/// (name, category, narration override).
const WORDS: [(&str, VocabCategory, Option<&str>); 34] = [
    ("Ant", VocabCategory::Animals, None),
    ("Apple", VocabCategory::Things, None),
    ("Ball", VocabCategory::Things, None),
    ("Box", VocabCategory::Things, None),
    ("Cat", VocabCategory::Animals, None),
    ("Cow", VocabCategory::Animals, None),
    ("Dog", VocabCategory::Animals, None),
    ("Duck", VocabCategory::Animals, None),
    ("Egg", VocabCategory::Things, None),
    ("Elephant", VocabCategory::Animals, None),
    ("Fish", VocabCategory::Animals, None),
    ("Goat", VocabCategory::Animals, None),
    ("Hat", VocabCategory::Things, None),
    ("Ice", VocabCategory::Nature, None),
    ("Ink", VocabCategory::Things, None),
    ("Juice", VocabCategory::Things, None),
    ("Key", VocabCategory::Things, None),
    ("Lion", VocabCategory::Animals, None),
    ("Moon", VocabCategory::Nature, None),
    ("Nest", VocabCategory::Nature, None),
    ("Orange", VocabCategory::Things, None),
    ("Panda", VocabCategory::Animals, None),
    ("Pizza", VocabCategory::Things, None),
    ("Quack", VocabCategory::Animals, None),
    ("Rabbit", VocabCategory::Animals, None),
    ("Sun", VocabCategory::Nature, None),
    ("Tiger", VocabCategory::Animals, None),
    ("Turtle", VocabCategory::Animals, None),
    ("Umbrella", VocabCategory::Things, None),
    ("Vacuum", VocabCategory::Things, None),
    ("Watermelon", VocabCategory::Things, None),
    ("Yogurt", VocabCategory::Things, None),
    ("Zebra", VocabCategory::Animals, Some("Zeebra")),
    ("Man", VocabCategory::People, None),
];

fn image_for(name: &str) -> AssetRef {
    AssetRef::new(format!("/images/vocab/{}.png", name.to_lowercase()))
}

/// Words in one category, or all words when `category` is `None`.
/// Sections follow [`CATEGORY_ORDER`]; words sort alphabetically within a
/// section.
pub fn vocab_catalog(category: Option<VocabCategory>) -> Catalog {
    let mut entries: Vec<&(&str, VocabCategory, Option<&str>)> = WORDS
        .iter()
        .filter(|(_, c, _)| category.map(|wanted| *c == wanted).unwrap_or(true))
        .collect();
    entries.sort_by_key(|entry| {
        let (name, c, _) = **entry;
        let section = CATEGORY_ORDER
            .iter()
            .position(|o| *o == c)
            .unwrap_or(usize::MAX);
        (section, name)
    });

    let items = entries
        .into_iter()
        .map(|(name, _, tts)| {
            let mut item =
                Item::new(format!("vocab-{}", name.to_lowercase()), *name).with_image(image_for(name));
            if let Some(tts) = tts {
                item = item.with_tts(*tts);
            }
            item
        })
        .collect();

    let (id, name) = match category {
        Some(c) => (format!("vocab-{}", c.as_str()), format!("First Words: {}", c.as_str())),
        None => ("vocab-all".to_string(), "First Words".to_string()),
    };
    Catalog::new(id, name, items).expect("vocabulary table is non-empty")
}
