//! Uniform shuffling for board layout.

use rand::Rng;

/// Returns a uniformly random permutation of `items` without mutating the input.
pub fn shuffled<T: Clone, R: Rng>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(rng, &mut out);
    out
}

/// In-place Fisher-Yates pass: for each index from the last down to 1,
/// swap with a uniformly chosen index in `[0, i]`.
pub fn shuffle_in_place<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_shuffled_preserves_membership() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..16).collect();

        let mut out = shuffled(&mut rng, &items);
        out.sort_unstable();
        assert_eq!(out, items);
    }

    #[test]
    fn test_shuffled_leaves_input_untouched() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = vec!["a", "b", "c", "d"];
        let before = items.clone();

        let _ = shuffled(&mut rng, &items);
        assert_eq!(items, before);
    }

    #[test]
    fn test_empty_and_single_element_inputs() {
        let mut rng = StdRng::seed_from_u64(7);

        let empty: Vec<u8> = vec![];
        assert!(shuffled(&mut rng, &empty).is_empty());
        assert_eq!(shuffled(&mut rng, &[42u8]), vec![42]);
    }

    #[test]
    fn test_distribution_is_near_uniform_on_three_elements() {
        // 6 permutations of [0, 1, 2]; each should land near 1/6 of trials.
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 6000;
        let mut counts = std::collections::HashMap::new();

        for _ in 0..trials {
            let perm = shuffled(&mut rng, &[0u8, 1, 2]);
            *counts.entry(perm).or_insert(0u32) += 1;
        }

        assert_eq!(counts.len(), 6);
        for (perm, count) in counts {
            let expected = trials as f64 / 6.0;
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.15,
                "permutation {:?} occurred {} times, expected ~{}",
                perm,
                count,
                expected
            );
        }
    }
}
