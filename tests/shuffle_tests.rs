use guesswho::core::shuffle::{shuffle_in_place, shuffled};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_shuffle_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(7);
    let items: Vec<u32> = (0..50).collect();

    let out = shuffled(&items, &mut rng);

    assert_eq!(out.len(), items.len());
    let mut sorted = out.clone();
    sorted.sort();
    assert_eq!(sorted, items);
    // the input is a copy source only
    assert_eq!(items, (0..50).collect::<Vec<u32>>());
}

#[test]
fn test_shuffle_handles_tiny_inputs() {
    let mut rng = StdRng::seed_from_u64(1);

    let mut empty: Vec<u8> = Vec::new();
    shuffle_in_place(&mut empty, &mut rng);
    assert!(empty.is_empty());

    let mut one = vec!['a'];
    shuffle_in_place(&mut one, &mut rng);
    assert_eq!(one, vec!['a']);
}

#[test]
fn test_shuffle_positions_are_uniform() {
    const N: usize = 4;
    const TRIALS: usize = 40_000;

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut counts = [[0usize; N]; N];

    for _ in 0..TRIALS {
        let mut items: Vec<usize> = (0..N).collect();
        shuffle_in_place(&mut items, &mut rng);
        for (pos, item) in items.iter().enumerate() {
            counts[pos][*item] += 1;
        }
    }

    // every element lands in every position about TRIALS / N times
    let expected = TRIALS / N;
    let tolerance = expected / 20;
    for (pos, row) in counts.iter().enumerate() {
        for (item, count) in row.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < tolerance,
                "element {} at position {}: {} (expected ~{})",
                item,
                pos,
                count,
                expected
            );
        }
    }
}

#[test]
fn test_same_seed_same_order() {
    let items: Vec<u32> = (0..20).collect();
    let a = shuffled(&items, &mut StdRng::seed_from_u64(99));
    let b = shuffled(&items, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}
