//! Route ranking.
//!
//! Comparators over computed routes plus two interchangeable in-place
//! sorting algorithms: a stable merge sort and an unstable randomized
//! quicksort. Both are generic over the element type and the comparator,
//! so a batch of routes can be ordered by any criterion with either
//! algorithm.

pub mod compare;

mod merge_sort;
mod quick_sort;

pub use merge_sort::merge_sort;
pub use quick_sort::quick_sort;
