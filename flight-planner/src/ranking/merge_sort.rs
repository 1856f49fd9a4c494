//! Stable merge sort.

use std::cmp::Ordering;

use tracing::debug;

/// Sort a slice in place using a stable top-down merge sort.
///
/// O(n log n) time in all cases, O(n) auxiliary space. Elements that
/// compare equal keep their relative order. No-op for slices of length
/// 0 or 1.
pub fn merge_sort<T, F>(items: &mut [T], compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }

    debug!(len = items.len(), "merge sort");
    sort_recursive(items, compare);
}

fn sort_recursive<T, F>(items: &mut [T], compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }

    let middle = items.len() / 2;
    {
        let (left, right) = items.split_at_mut(middle);
        sort_recursive(left, compare);
        sort_recursive(right, compare);
    }
    merge(items, middle, compare);
}

/// Merge the two sorted halves `items[..middle]` and `items[middle..]`.
fn merge<T, F>(items: &mut [T], middle: usize, compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let left: Vec<T> = items[..middle].to_vec();
    let right: Vec<T> = items[middle..].to_vec();

    let mut left_index = 0;
    let mut right_index = 0;

    for slot in items.iter_mut() {
        // Taking from the left on ties is what makes the sort stable
        let take_left = right_index >= right.len()
            || (left_index < left.len()
                && compare(&left[left_index], &right[right_index]) != Ordering::Greater);

        if take_left {
            *slot = left[left_index].clone();
            left_index += 1;
        } else {
            *slot = right[right_index].clone();
            right_index += 1;
        }
    }
}
