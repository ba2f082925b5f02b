use rand::Rng;

/// Unbiased in-place permutation (Fisher-Yates).
///
/// Walks `i` from the last index down to 1 and swaps it with a `j` drawn
/// uniformly from `0..=i`.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffled copy of `items`; the input is left untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}
