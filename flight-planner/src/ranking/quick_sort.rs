//! Unstable randomized quicksort.

use std::cmp::Ordering;

use rand::Rng;
use tracing::debug;

/// Sort a slice in place using quicksort with a randomized pivot.
///
/// O(n log n) expected time, O(log n) expected recursion depth; the
/// random pivot makes the O(n²) worst case improbable for adversarial
/// input. Not stable: the relative order of equal elements may change.
/// No-op for slices of length 0 or 1.
///
/// The random source is a parameter so callers (and tests) can supply a
/// seeded generator and reproduce the exact partition sequence.
pub fn quick_sort<T, F, R>(items: &mut [T], compare: &F, rng: &mut R)
where
    F: Fn(&T, &T) -> Ordering,
    R: Rng,
{
    if items.len() <= 1 {
        return;
    }

    debug!(len = items.len(), "quicksort");
    sort_recursive(items, compare, rng);
}

fn sort_recursive<T, F, R>(items: &mut [T], compare: &F, rng: &mut R)
where
    F: Fn(&T, &T) -> Ordering,
    R: Rng,
{
    if items.len() <= 1 {
        return;
    }

    let pivot_index = partition(items, compare, rng);
    let (left, right) = items.split_at_mut(pivot_index);
    sort_recursive(left, compare, rng);
    sort_recursive(&mut right[1..], compare, rng);
}

/// Partition around a uniformly chosen pivot: the pivot is swapped to the
/// end, elements not greater than it are moved left in a single pass, and
/// the pivot lands in its final position, which is returned.
fn partition<T, F, R>(items: &mut [T], compare: &F, rng: &mut R) -> usize
where
    F: Fn(&T, &T) -> Ordering,
    R: Rng,
{
    let high = items.len() - 1;
    let pivot_index = rng.gen_range(0..items.len());
    items.swap(pivot_index, high);

    let mut store = 0;
    for current in 0..high {
        if compare(&items[current], &items[high]) != Ordering::Greater {
            items.swap(store, current);
            store += 1;
        }
    }

    items.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ascending(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn sorts_unordered_input() {
        let mut values = vec![5, 3, 8, 1, 9, 2, 7];
        let mut rng = StdRng::seed_from_u64(0);
        quick_sort(&mut values, &ascending, &mut rng);
        assert_eq!(values, vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut rng = StdRng::seed_from_u64(0);

        let mut empty: Vec<i32> = vec![];
        quick_sort(&mut empty, &ascending, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![42];
        quick_sort(&mut single, &ascending, &mut rng);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn handles_duplicates() {
        let mut values = vec![3, 1, 3, 1, 3, 2, 2];
        let mut rng = StdRng::seed_from_u64(1);
        quick_sort(&mut values, &ascending, &mut rng);
        assert_eq!(values, vec![1, 1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn same_seed_reproduces_same_result() {
        let input = vec![9, 4, 6, 2, 8, 5, 1, 7, 3];

        let mut first = input.clone();
        quick_sort(&mut first, &ascending, &mut StdRng::seed_from_u64(42));

        let mut second = input;
        quick_sort(&mut second, &ascending, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn sorted_and_reverse_inputs() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut ascending_input: Vec<i32> = (0..50).collect();
        quick_sort(&mut ascending_input, &ascending, &mut rng);
        assert_eq!(ascending_input, (0..50).collect::<Vec<_>>());

        let mut descending_input: Vec<i32> = (0..50).rev().collect();
        quick_sort(&mut descending_input, &ascending, &mut rng);
        assert_eq!(descending_input, (0..50).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    proptest! {
        /// Output is sorted under the comparator, whatever the seed.
        #[test]
        fn output_is_sorted(
            mut values in prop::collection::vec(any::<i32>(), 0..100),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            quick_sort(&mut values, &|a: &i32, b: &i32| a.cmp(b), &mut rng);
            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }

        /// Output is a permutation of the input.
        #[test]
        fn output_is_permutation(
            values in prop::collection::vec(any::<i32>(), 0..100),
            seed in any::<u64>(),
        ) {
            let mut sorted = values.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            quick_sort(&mut sorted, &|a: &i32, b: &i32| a.cmp(b), &mut rng);

            let mut expected = values;
            expected.sort_unstable();
            let mut actual = sorted;
            actual.sort_unstable();
            prop_assert_eq!(actual, expected);
        }
    }
}
