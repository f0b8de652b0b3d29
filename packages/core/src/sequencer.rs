//! Non-repeating shuffle sequencing.
//!
//! A [`ShuffleSequencer`] holds one random permutation of the item
//! indices and a cursor into it. When the cursor runs off the end the
//! caller reshuffles, passing the index most recently shown so the fresh
//! permutation never repeats it at the boundary (for sets of two or
//! more items).

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct ShuffleSequencer {
    order: Vec<usize>,
    cursor: usize,
}

impl ShuffleSequencer {
    /// A sequencer over `len` items, starting exhausted so the first
    /// advance triggers a shuffle.
    pub fn new(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
            cursor: len,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True once every slot of the current permutation has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.order.len()
    }

    /// Generate a fresh uniform permutation and reset the cursor.
    ///
    /// If the new permutation would start with `exclude_first` and more
    /// than one item exists, the first two slots are swapped so the
    /// displayed item changes across the reshuffle boundary.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R, exclude_first: Option<usize>) {
        self.order.shuffle(rng);
        self.cursor = 0;
        if self.order.len() > 1 {
            if let Some(excluded) = exclude_first {
                if self.order.first() == Some(&excluded) {
                    self.order.swap(0, 1);
                }
            }
        }
    }

    /// The index at the cursor, advancing the cursor. `None` when the
    /// permutation is exhausted (reshuffle first) or empty.
    pub fn next(&mut self) -> Option<usize> {
        let index = self.order.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(index)
    }
}
