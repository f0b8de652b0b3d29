//! The full-alphabet phonics deck: 26 letters, each with a phonetic
//! narration text and a recorded sound clip.

use super::{AssetRef, Catalog, Item};

/// (letter, phonetic narration, clip number in the sound bank).
const LETTERS: [(&str, &str, u8); 26] = [
    ("A", "Ah", 1),
    ("B", "Buh", 2),
    ("C", "Cuh", 3),
    ("D", "Duh", 4),
    ("E", "Eh", 5),
    ("F", "F", 6),
    ("G", "Guh", 7),
    ("H", "Huh", 8),
    ("I", "Ih", 9),
    ("J", "Juh", 10),
    ("K", "Kuh", 11),
    ("L", "L", 12),
    ("M", "M", 13),
    ("N", "N", 14),
    ("O", "Oh", 15),
    ("P", "Puh", 16),
    ("Q", "Qu", 17),
    ("R", "R", 18),
    ("S", "S", 19),
    ("T", "Tuh", 20),
    ("U", "Uh", 21),
    ("V", "V", 22),
    ("W", "Wuh", 23),
    ("X", "Ks", 24),
    ("Y", "Yuh", 25),
    ("Z", "Z", 26),
];

pub(crate) fn sound_clip(number: u8) -> AssetRef {
    AssetRef::new(format!("/sounds/Phonics/Sound {number:02}.mp3"))
}

/// Clip for a single letter, if it is an ASCII letter.
pub fn letter_clip(letter: char) -> Option<AssetRef> {
    let upper = letter.to_ascii_uppercase();
    LETTERS
        .iter()
        .find(|(l, _, _)| l.chars().next() == Some(upper))
        .map(|(_, _, n)| sound_clip(*n))
}

/// Phonetic narration text for a single letter.
pub fn phonetic(letter: char) -> Option<&'static str> {
    let upper = letter.to_ascii_uppercase();
    LETTERS
        .iter()
        .find(|(l, _, _)| l.chars().next() == Some(upper))
        .map(|(_, p, _)| *p)
}

/// The "Full Alphabet" catalog. Display shows upper and lower case
/// together ("Aa"); narration uses the phonetic text as fallback for the
/// recorded clip.
pub fn full_alphabet() -> Catalog {
    let items = LETTERS
        .iter()
        .map(|(letter, phonetic, number)| {
            let lower = letter.to_lowercase();
            Item::new(format!("letter-{}", lower), format!("{letter}{lower}"))
                .with_tts(*phonetic)
                .with_clip(sound_clip(*number))
        })
        .collect();
    Catalog::new("letters-full", "Full Alphabet", items)
        .expect("alphabet table is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_26_letters() {
        let catalog = full_alphabet();
        assert_eq!(catalog.len(), 26);
        assert_eq!(catalog.item(0).unwrap().display, "Aa");
        assert_eq!(catalog.item(25).unwrap().display, "Zz");
    }

    #[test]
    fn clips_are_zero_padded() {
        assert_eq!(
            letter_clip('a').unwrap().as_str(),
            "/sounds/Phonics/Sound 01.mp3"
        );
        assert_eq!(
            letter_clip('Z').unwrap().as_str(),
            "/sounds/Phonics/Sound 26.mp3"
        );
        assert_eq!(letter_clip('!'), None);
    }

    #[test]
    fn phonetic_text_is_the_narration_fallback() {
        let catalog = full_alphabet();
        assert_eq!(catalog.item(1).unwrap().spoken_text(), "Buh");
    }
}
