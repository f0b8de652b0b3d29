//! The simple-sentences deck. Each sentence reveals an illustration: a
//! dedicated scene image when one exists, otherwise the image of the first
//! known noun in the sentence.

use serde::{Deserialize, Serialize};

use super::{AssetRef, Catalog, Item};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceCategory {
    Animals,
    Things,
    Nature,
    Vehicles,
    People,
    Actions,
}

impl SentenceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Things => "things",
            Self::Nature => "nature",
            Self::Vehicles => "vehicles",
            Self::People => "people",
            Self::Actions => "actions",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "animals" => Some(Self::Animals),
            "things" => Some(Self::Things),
            "nature" => Some(Self::Nature),
            "vehicles" => Some(Self::Vehicles),
            "people" => Some(Self::People),
            "actions" => Some(Self::Actions),
            _ => None,
        }
    }
}

pub const CATEGORY_ORDER: [SentenceCategory; 6] = [
    SentenceCategory::Animals,
    SentenceCategory::Things,
    SentenceCategory::Nature,
    SentenceCategory::Vehicles,
    SentenceCategory::People,
    SentenceCategory::Actions,
];

const SENTENCES: [(&str, SentenceCategory); 40] = [
    ("I see a cat.", SentenceCategory::Animals),
    ("The dog can run.", SentenceCategory::Animals),
    ("The hen is on a log.", SentenceCategory::Animals),
    ("We see a cow.", SentenceCategory::Animals),
    ("The rat is in a box.", SentenceCategory::Animals),
    ("A bat is on a rock.", SentenceCategory::Animals),
    ("The lion is big.", SentenceCategory::Animals),
    ("I see a fish.", SentenceCategory::Animals),
    ("The turtle can nap.", SentenceCategory::Animals),
    ("The ball is in a bag.", SentenceCategory::Things),
    ("I see a hat.", SentenceCategory::Things),
    ("The cup is on a bed.", SentenceCategory::Things),
    ("A toy is in the box.", SentenceCategory::Things),
    ("I eat an apple.", SentenceCategory::Things),
    ("We see a pizza.", SentenceCategory::Things),
    ("The key is on the bed.", SentenceCategory::Things),
    ("The kid has a pen.", SentenceCategory::Things),
    ("I see yogurt.", SentenceCategory::Things),
    ("The man has an orange.", SentenceCategory::Things),
    ("We see the sun.", SentenceCategory::Nature),
    ("The moon is up.", SentenceCategory::Nature),
    ("A nest is in a tree.", SentenceCategory::Nature),
    ("I sit on a rock.", SentenceCategory::Nature),
    ("A log is big.", SentenceCategory::Nature),
    ("I see a car.", SentenceCategory::Vehicles),
    ("The bus is big.", SentenceCategory::Vehicles),
    ("A van is in the sun.", SentenceCategory::Vehicles),
    ("I see a jet.", SentenceCategory::Vehicles),
    ("We go on a boat.", SentenceCategory::Vehicles),
    ("The kid is on a bike.", SentenceCategory::Vehicles),
    ("The train can go.", SentenceCategory::Vehicles),
    ("Mom and Dad hug.", SentenceCategory::People),
    ("I see a man.", SentenceCategory::People),
    ("The kid can hop.", SentenceCategory::People),
    ("I run to a box.", SentenceCategory::Actions),
    ("We sit on a log.", SentenceCategory::Actions),
    ("The cat can hop.", SentenceCategory::Actions),
    ("The kid can nap.", SentenceCategory::Actions),
    ("We go to a tree.", SentenceCategory::Actions),
    ("I see the dog run.", SentenceCategory::Actions),
];

/// Nouns that have an illustration of their own.
const NOUN_IMAGES: [&str; 46] = [
    "apple", "ball", "hat", "key", "box", "cup", "bed", "toy", "pen", "bag", "juice", "pizza",
    "yogurt", "orange", "watermelon", "sun", "moon", "nest", "tree", "rock", "log", "car", "bus",
    "van", "jet", "boat", "bike", "train", "mom", "dad", "kid", "man", "cat", "dog", "fish",
    "goat", "lion", "rabbit", "turtle", "zebra", "panda", "hen", "cow", "duck", "rat", "bat",
];

/// Sentences with a dedicated composed scene image.
const SCENE_IMAGES: [(&str, &str); 31] = [
    ("The dog can run.", "dog_run"),
    ("The hen is on a log.", "hen_log"),
    ("The rat is in a box.", "rat_box"),
    ("A bat is on a rock.", "bat_rock"),
    ("The lion is big.", "big_lion"),
    ("The ball is in a bag.", "bag_ball"),
    ("The cup is on a bed.", "cup_bed"),
    ("The key is on the bed.", "key_bed"),
    ("The kid has a pen.", "kid_pen"),
    ("The man has an orange.", "man_orange"),
    ("The moon is up.", "moon_up"),
    ("A nest is in a tree.", "nest_tree"),
    ("I sit on a rock.", "i_sit_on_rock"),
    ("A log is big.", "log_big"),
    ("The bus is big.", "big_bus"),
    ("The jet can go.", "jet_go"),
    ("The kid is on a bike.", "kid_bike"),
    ("I eat an apple.", "eat_apple"),
    ("Mom and Dad hug.", "mom_dad_hug"),
    ("I see a car.", "see_car"),
    ("I see a hat.", "see_hat"),
    ("We see a pizza.", "see_pizza"),
    ("I see yogurt.", "see_yogurt"),
    ("A toy is in the box.", "toy_box"),
    ("The train can go.", "train_go"),
    ("The turtle can nap.", "turtle_nap"),
    ("A van is in the sun.", "van_sun"),
    ("We go on a boat.", "we_go_on_boat"),
    ("We go to a tree.", "we_go_tree"),
    ("We see the sun.", "we_see_sun"),
    ("We sit on a log.", "we_sit_log"),
];

/// True if the (lower-cased, punctuation-stripped) word has its own
/// illustration; used by hosts to colorize nouns in the sentence.
pub fn is_pictured_noun(word: &str) -> bool {
    let cleaned = word.to_lowercase().replace('.', "");
    NOUN_IMAGES.contains(&cleaned.as_str())
}

/// Scene image for the sentence, else the first pictured noun's image.
pub fn sentence_image(text: &str) -> Option<AssetRef> {
    if let Some((_, scene)) = SCENE_IMAGES.iter().find(|(s, _)| *s == text) {
        return Some(AssetRef::new(format!("/images/scenes/{scene}.png")));
    }
    text.to_lowercase()
        .replace('.', "")
        .split(' ')
        .find(|word| NOUN_IMAGES.contains(word))
        .map(|word| AssetRef::new(format!("/images/vocab/{word}.png")))
}

/// Sentences in one category, or all sentences when `category` is `None`.
/// Sections follow [`CATEGORY_ORDER`]; order within a section is the
/// authoring order.
pub fn sentences_catalog(category: Option<SentenceCategory>) -> Catalog {
    let mut entries: Vec<(usize, &str, SentenceCategory)> = SENTENCES
        .iter()
        .enumerate()
        .filter(|(_, (_, c))| category.map(|wanted| *c == wanted).unwrap_or(true))
        .map(|(i, (text, c))| (i, *text, *c))
        .collect();
    entries.sort_by_key(|(authored, _, c)| {
        let section = CATEGORY_ORDER
            .iter()
            .position(|o| o == c)
            .unwrap_or(usize::MAX);
        (section, *authored)
    });

    let items = entries
        .into_iter()
        .map(|(i, text, _)| {
            let mut item = Item::new(format!("sentence-{i}"), text);
            if let Some(image) = sentence_image(text) {
                item = item.with_image(image);
            }
            item
        })
        .collect();

    let (id, name) = match category {
        Some(c) => (
            format!("sentences-{}", c.as_str()),
            format!("Sentences: {}", c.as_str()),
        ),
        None => ("sentences-all".to_string(), "Sentences".to_string()),
    };
    Catalog::new(id, name, items).expect("sentence table is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_sentences_in_six_categories() {
        assert_eq!(sentences_catalog(None).len(), 40);
        assert_eq!(
            sentences_catalog(Some(SentenceCategory::Nature)).len(),
            5
        );
    }

    #[test]
    fn scene_image_wins_over_noun_image() {
        assert_eq!(
            sentence_image("Mom and Dad hug.").unwrap().as_str(),
            "/images/scenes/mom_dad_hug.png"
        );
        // No composed scene: falls back to the first pictured noun.
        assert_eq!(
            sentence_image("I see a cat.").unwrap().as_str(),
            "/images/vocab/cat.png"
        );
    }

    #[test]
    fn noun_detection_strips_punctuation() {
        assert!(is_pictured_noun("cat."));
        assert!(is_pictured_noun("Dog"));
        assert!(!is_pictured_noun("see"));
    }
}
