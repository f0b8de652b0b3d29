//! The animal phonics-breakdown deck: each animal word is split into
//! tappable sound chunks. Chunk audio is resolved through the phonics
//! tables where a recording exists (letter sounds, family stems, full CVC
//! words); everything else narrates the chunk text.

use super::families::CvcFamily;
use super::letters::{letter_clip, phonetic};
use super::{AssetRef, Catalog, Item, Part};

/// (name, sound chunks).
const ANIMALS: [(&str, &[&str]); 10] = [
    ("Cat", &["C", "AT"]),
    ("Dog", &["D", "OG"]),
    ("Pig", &["P", "IG"]),
    ("Duck", &["D", "U", "CK"]),
    ("Fish", &["F", "I", "SH"]),
    ("Cow", &["C", "OW"]),
    ("Lion", &["LI", "ON"]),
    ("Tiger", &["TI", "GER"]),
    ("Turtle", &["TUR", "TLE"]),
    ("Elephant", &["EL", "E", "PHANT"]),
];

fn image_for(name: &str) -> AssetRef {
    AssetRef::new(format!("/images/vocab/{}.png", name.to_lowercase()))
}

/// A single sound chunk, with recorded audio when the phonics bank has
/// it: a letter sound for one-letter chunks, the family stem recording
/// for a CVC ending.
fn chunk_part(chunk: &str) -> Part {
    let mut part = Part::new(chunk);
    if chunk.chars().count() == 1 {
        let letter = chunk.chars().next().unwrap_or('A');
        if let Some(clip) = letter_clip(letter) {
            part = part.with_clip(clip);
        }
        if let Some(p) = phonetic(letter) {
            part = part.with_tts(p);
        }
    } else {
        let lower = chunk.to_lowercase();
        if let Some(family) = CvcFamily::stem_for(&lower) {
            part = part.with_clip(family.stem_clip());
        }
        part = part.with_tts(lower);
    }
    part
}

/// Breakdown narration: the chunks in order, then the whole word
/// ("C... AT... Cat!").
fn breakdown(name: &str, chunks: &[&str]) -> String {
    format!("{}... {name}!", chunks.join("... "))
}

pub fn animals_catalog() -> Catalog {
    let items = ANIMALS
        .iter()
        .map(|(name, chunks)| {
            let mut item = Item::new(format!("animal-{}", name.to_lowercase()), *name)
                .with_image(image_for(name))
                .with_parts(chunks.iter().map(|c| chunk_part(c)).collect())
                .with_completion_tts(breakdown(name, chunks));
            // The phonics bank has full recordings for the CVC animals.
            if let Some((_, _, _, clip)) = CvcFamily::lookup(name) {
                item = item.with_clip(AssetRef::new(clip));
            }
            item
        })
        .collect();
    Catalog::new("animals", "Animal Sounds", items).expect("animal table is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_animals_with_chunked_parts() {
        let catalog = animals_catalog();
        assert_eq!(catalog.len(), 10);
        let duck = catalog.item(3).unwrap();
        assert_eq!(duck.display, "Duck");
        assert_eq!(duck.parts.len(), 3);
        assert_eq!(duck.parts[2].text, "CK");
    }

    #[test]
    fn cat_resolves_through_the_phonics_bank() {
        let catalog = animals_catalog();
        let cat = catalog.item(0).unwrap();
        // Full-word recording from the -at family.
        assert_eq!(cat.clip.as_ref().unwrap().as_str(), "/sounds/Phonics/Cat.mp3");
        // Letter sound for the consonant chunk.
        assert_eq!(
            cat.parts[0].clip.as_ref().unwrap().as_str(),
            "/sounds/Phonics/Sound 03.mp3"
        );
        // Stem recording for the family ending.
        assert_eq!(
            cat.parts[1].clip.as_ref().unwrap().as_str(),
            "/sounds/Phonics/At.mp3"
        );
    }

    #[test]
    fn unrecorded_chunks_fall_back_to_text() {
        let catalog = animals_catalog();
        let tiger = catalog.item(7).unwrap();
        assert!(tiger.clip.is_none());
        assert!(tiger.parts[1].clip.is_none());
        assert_eq!(tiger.parts[1].tts.as_deref(), Some("ger"));
        assert_eq!(
            tiger.completion_tts.as_deref(),
            Some("TI... GER... Tiger!")
        );
    }
}
