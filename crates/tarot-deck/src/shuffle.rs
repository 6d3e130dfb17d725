//! Fisher-Yates shuffle.

use rand::Rng;

/// Return a uniformly random permutation of `deck`.
///
/// Walks from the last index down, swapping each position `i` with a
/// uniformly chosen `j` in `0..=i`. The input is left untouched; the
/// permutation is built on a copy.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(deck: &[T], rng: &mut R) -> Vec<T> {
    let mut cards = deck.to_vec();
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
    cards
}
