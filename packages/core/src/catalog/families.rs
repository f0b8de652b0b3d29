//! CVC word-family decks ("-at", "-et", "-it").
//!
//! Each family catalog starts with the stem item ("_at") followed by one
//! item per consonant+stem word. Word narration prefers the recorded
//! full-word clip, with the spelled-out breakdown ("B... at... Bat") as
//! the completion text.

use super::letters::{letter_clip, sound_clip};
use super::{AssetRef, Catalog, Item, Part};

/// A consonant-vowel-consonant word family.
#[derive(Debug, Clone)]
pub struct CvcFamily {
    pub id: &'static str,
    pub name: &'static str,
    /// The shared ending ("at").
    pub family: &'static str,
    /// Stem display with the consonant slot blanked ("_at").
    pub stem: &'static str,
    /// Clip spoken for the stem alone.
    pub stem_clip: &'static str,
    /// (consonant, word, full-word clip).
    pub words: &'static [(&'static str, &'static str, &'static str)],
}

const AT_WORDS: &[(&str, &str, &str)] = &[
    ("B", "Bat", "/sounds/Phonics/Bat.mp3"),
    ("C", "Cat", "/sounds/Phonics/Cat.mp3"),
    ("H", "Hat", "/sounds/Phonics/Hat.mp3"),
    ("M", "Mat", "/sounds/Phonics/Mat.mp3"),
    ("P", "Pat", "/sounds/Phonics/Pat.mp3"),
    ("R", "Rat", "/sounds/Phonics/Rat.mp3"),
    ("S", "Sat", "/sounds/Phonics/Sat.mp3"),
];

const ET_WORDS: &[(&str, &str, &str)] = &[
    ("B", "Bet", "/sounds/Phonics/Sound 02.mp3"),
    ("G", "Get", "/sounds/Phonics/Sound 07.mp3"),
    ("J", "Jet", "/sounds/Phonics/Sound 10.mp3"),
    ("L", "Let", "/sounds/Phonics/Sound 12.mp3"),
    ("M", "Met", "/sounds/Phonics/Sound 13.mp3"),
    ("N", "Net", "/sounds/Phonics/Sound 14.mp3"),
    ("P", "Pet", "/sounds/Phonics/Sound 16.mp3"),
    ("W", "Wet", "/sounds/Phonics/Sound 23.mp3"),
];

const IT_WORDS: &[(&str, &str, &str)] = &[
    ("B", "Bit", "/sounds/Phonics/Sound 02.mp3"),
    ("F", "Fit", "/sounds/Phonics/Sound 06.mp3"),
    ("H", "Hit", "/sounds/Phonics/Sound 08.mp3"),
    ("K", "Kit", "/sounds/Phonics/Sound 11.mp3"),
    ("L", "Lit", "/sounds/Phonics/Sound 12.mp3"),
    ("P", "Pit", "/sounds/Phonics/Sound 16.mp3"),
    ("S", "Sit", "/sounds/Phonics/Sound 19.mp3"),
    ("W", "Wit", "/sounds/Phonics/Sound 23.mp3"),
];

static FAMILIES: [CvcFamily; 3] = [
    CvcFamily {
        id: "cvc-at",
        name: "-at Family",
        family: "at",
        stem: "_at",
        stem_clip: "/sounds/Phonics/At.mp3",
        words: AT_WORDS,
    },
    CvcFamily {
        id: "cvc-et",
        name: "-et Family",
        family: "et",
        stem: "_et",
        stem_clip: "/sounds/Phonics/Sound 05.mp3",
        words: ET_WORDS,
    },
    CvcFamily {
        id: "cvc-it",
        name: "-it Family",
        family: "it",
        stem: "_it",
        stem_clip: "/sounds/Phonics/Sound 09.mp3",
        words: IT_WORDS,
    },
];

pub fn families() -> &'static [CvcFamily] {
    &FAMILIES
}

pub fn family_by_id(id: &str) -> Option<&'static CvcFamily> {
    FAMILIES.iter().find(|f| f.id == id)
}

impl CvcFamily {
    /// Clip spoken for the stem alone.
    pub fn stem_clip(&self) -> AssetRef {
        AssetRef::new(self.stem_clip)
    }

    /// Spelled-out breakdown narration for one of the family's words.
    pub fn breakdown(&self, consonant: &str, word: &str) -> String {
        format!("{consonant}... {}... {word}", self.family)
    }

    /// The stem item followed by one item per word.
    pub fn catalog(&self) -> Catalog {
        let mut items = Vec::with_capacity(self.words.len() + 1);
        items.push(
            Item::new(format!("{}-stem", self.id), self.stem)
                .with_tts(self.family)
                .with_clip(self.stem_clip()),
        );
        for (consonant, word, clip) in self.words {
            let parts = vec![
                Part::new(*consonant)
                    .with_clip(letter_clip(consonant.chars().next().unwrap_or('A')).unwrap_or_else(|| sound_clip(1))),
                Part::new(self.family)
                    .with_clip(self.stem_clip()),
            ];
            items.push(
                Item::new(format!("{}-{}", self.id, word.to_lowercase()), *word)
                    .with_clip(AssetRef::new(*clip))
                    .with_parts(parts)
                    .with_completion_tts(self.breakdown(consonant, word)),
            );
        }
        Catalog::new(self.id, self.name, items).expect("family table is non-empty")
    }

    /// Family whose shared ending matches `stem`, ignoring case.
    pub fn stem_for(stem: &str) -> Option<&'static CvcFamily> {
        let lower = stem.to_lowercase();
        FAMILIES.iter().find(|f| f.family == lower)
    }

    /// Find the family and word entry matching `word`, ignoring case.
    pub fn lookup(word: &str) -> Option<(&'static CvcFamily, &'static str, &'static str, &'static str)> {
        let lower = word.to_lowercase();
        FAMILIES.iter().find_map(|family| {
            family
                .words
                .iter()
                .find(|(_, w, _)| w.to_lowercase() == lower)
                .map(|(consonant, w, clip)| (family, *consonant, *w, *clip))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_is_the_first_item() {
        let catalog = family_by_id("cvc-at").unwrap().catalog();
        assert_eq!(catalog.item(0).unwrap().display, "_at");
        assert_eq!(catalog.item(1).unwrap().display, "Bat");
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn word_items_carry_breakdown_and_two_parts() {
        let catalog = family_by_id("cvc-at").unwrap().catalog();
        let cat = catalog.item(2).unwrap();
        assert_eq!(cat.display, "Cat");
        assert_eq!(cat.completion_tts.as_deref(), Some("C... at... Cat"));
        assert_eq!(cat.parts.len(), 2);
        assert_eq!(cat.parts[0].text, "C");
        assert_eq!(cat.parts[1].text, "at");
        assert!(cat.parts[0].clip.is_some());
        assert_eq!(
            cat.parts[1].clip.as_ref().unwrap().as_str(),
            "/sounds/Phonics/At.mp3"
        );
    }

    #[test]
    fn lookup_finds_words_across_families() {
        let (family, consonant, word, _) = CvcFamily::lookup("jet").unwrap();
        assert_eq!(family.id, "cvc-et");
        assert_eq!(consonant, "J");
        assert_eq!(word, "Jet");
        assert!(CvcFamily::lookup("zebra").is_none());
    }
}
