//! Classic comparison sorts: bubble, merge, and quick sort.
//!
//! Three textbook algorithms for the same problem, kept side by side because
//! their trade-offs differ in every dimension that matters: asymptotic cost,
//! auxiliary space, and stability.
//!
//! # Strategies
//!
//! | Function | Strategy | Complexity | Stable | In-place |
//! |----------|----------|------------|--------|----------|
//! | [`bubble_sort`] | Adjacent-pair swap passes | O(n²) | yes | yes |
//! | [`merge_sort`] | Recursive split + stable merge | O(n log n) | yes | no (O(n) aux) |
//! | [`quick_sort`] | Middle pivot, three-way partition | O(n log n) avg, O(n²) worst | no guarantee | no |
//!
//! # Notes
//!
//! - Bubble sort's pass `k` bubbles the largest remaining element to position
//!   `n-1-k`, so each pass scans one element fewer; a swap-free pass means the
//!   slice is sorted and the loop exits early, after at most `n-1` passes.
//! - The merge step takes from the left half on ties, which is what makes
//!   merge sort stable.
//! - Quick sort splits around the middle-indexed element into strictly-less,
//!   equal, and strictly-greater groups, so runs of duplicates cost nothing
//!   extra; an unlucky pivot sequence still degrades to O(n²).

use std::cmp::Ordering;

/// In-place bubble sort.
///
/// Repeatedly sweeps the slice, swapping adjacent out-of-order pairs. Each
/// sweep shortens by one because the largest unsorted element has reached its
/// final position. Exits as soon as a sweep performs no swap.
pub fn bubble_sort<T: Ord>(values: &mut [T]) {
    let n = values.len();
    for pass in 1..n {
        let mut swapped = false;
        for i in 0..n - pass {
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Top-down merge sort returning a new sorted vector.
///
/// Splits at `len / 2` (the lower half gets `floor(n/2)` elements), sorts each
/// half recursively, then merges. Allocates O(n) per merge level.
pub fn merge_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let mid = values.len() / 2;
    let left = merge_sort(&values[..mid]);
    let right = merge_sort(&values[mid..]);
    merge(&left, &right)
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        // Ties take from the left half; this is what keeps the sort stable.
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Quick sort returning a new sorted vector.
///
/// Partitions around the middle-indexed element into strictly-less, equal, and
/// strictly-greater groups, recurses on the outer two, and concatenates.
/// Average O(n log n); worst case O(n²) under adversarial pivot sequences.
pub fn quick_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let pivot = values[values.len() / 2].clone();
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for value in values {
        match value.cmp(&pivot) {
            Ordering::Less => less.push(value.clone()),
            Ordering::Equal => equal.push(value.clone()),
            Ordering::Greater => greater.push(value.clone()),
        }
    }

    let mut sorted = quick_sort(&less);
    sorted.reserve(equal.len() + greater.len());
    sorted.extend(equal);
    sorted.extend(quick_sort(&greater));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_sorted(values: &[i64]) -> Vec<i64> {
        let mut sorted = values.to_vec();
        sorted.sort();
        sorted
    }

    fn bubble_sorted(values: &[i64]) -> Vec<i64> {
        let mut out = values.to_vec();
        bubble_sort(&mut out);
        out
    }

    proptest! {
        /// Every variant agrees with the standard library sort, which pins
        /// both the multiset and the non-descending order of the output.
        /// Lengths stay modest because bubble sort is quadratic.
        #[test]
        fn variants_match_std(values in proptest::collection::vec(any::<i64>(), 0..=256)) {
            let expected = reference_sorted(&values);
            prop_assert_eq!(&bubble_sorted(&values), &expected);
            prop_assert_eq!(&merge_sort(&values), &expected);
            prop_assert_eq!(&quick_sort(&values), &expected);
        }

        /// Sorting already-sorted input returns it unchanged.
        #[test]
        fn sorted_input_is_identity(mut values in proptest::collection::vec(any::<i64>(), 0..=1024)) {
            values.sort();
            prop_assert_eq!(&bubble_sorted(&values), &values);
            prop_assert_eq!(&merge_sort(&values), &values);
            prop_assert_eq!(&quick_sort(&values), &values);
        }
    }

    #[test]
    fn known_cases() {
        let cases: &[(&[i64], &[i64])] = &[
            (&[5, 3, 8, 1], &[1, 3, 5, 8]),
            (&[2, 2, 2], &[2, 2, 2]),
            (&[-3, 7, 0, -3, 2], &[-3, -3, 0, 2, 7]),
            (&[1, 2, 3, 4], &[1, 2, 3, 4]),
            (&[4, 3, 2, 1], &[1, 2, 3, 4]),
        ];

        for &(input, expected) in cases {
            assert_eq!(bubble_sorted(input), expected, "bubble {input:?}");
            assert_eq!(merge_sort(input), expected, "merge {input:?}");
            assert_eq!(quick_sort(input), expected, "quick {input:?}");
        }
    }

    #[test]
    fn empty_and_single() {
        let empty: [i64; 0] = [];
        assert!(bubble_sorted(&empty).is_empty());
        assert!(merge_sort(&empty).is_empty());
        assert!(quick_sort(&empty).is_empty());

        let single = [42i64];
        assert_eq!(bubble_sorted(&single), [42]);
        assert_eq!(merge_sort(&single), [42]);
        assert_eq!(quick_sort(&single), [42]);
    }

    #[test]
    fn small_grid_matches_std() {
        // Every sequence of length <= 4 over the values {0, 1, 2}.
        for len in 0..=4usize {
            let combos = 3usize.pow(len as u32);
            for code in 0..combos {
                let mut values = Vec::with_capacity(len);
                let mut rest = code;
                for _ in 0..len {
                    values.push((rest % 3) as i64);
                    rest /= 3;
                }

                let expected = reference_sorted(&values);
                assert_eq!(bubble_sorted(&values), expected, "bubble {values:?}");
                assert_eq!(merge_sort(&values), expected, "merge {values:?}");
                assert_eq!(quick_sort(&values), expected, "quick {values:?}");
            }
        }
    }

    /// Orders by `key` alone; `tag` records the original position so tests can
    /// observe whether equal keys kept their relative order.
    #[derive(Clone, Debug)]
    struct Tagged {
        key: u8,
        tag: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn tagged(keys: &[u8]) -> Vec<Tagged> {
        keys.iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag })
            .collect()
    }

    fn key_tag_pairs(values: &[Tagged]) -> Vec<(u8, usize)> {
        values.iter().map(|v| (v.key, v.tag)).collect()
    }

    #[test]
    fn stable_variants_preserve_equal_key_order() {
        let input = tagged(&[3, 1, 3, 2, 1, 3]);
        let expected = vec![(1, 1), (1, 4), (2, 3), (3, 0), (3, 2), (3, 5)];

        let mut bubbled = input.clone();
        bubble_sort(&mut bubbled);
        assert_eq!(key_tag_pairs(&bubbled), expected);

        assert_eq!(key_tag_pairs(&merge_sort(&input)), expected);
    }

    #[test]
    fn quick_sort_orders_duplicate_keys_without_order_guarantee() {
        let input = tagged(&[3, 1, 3, 2, 1, 3]);
        let sorted = quick_sort(&input);

        let keys: Vec<u8> = sorted.iter().map(|v| v.key).collect();
        assert_eq!(keys, [1, 1, 2, 3, 3, 3]);

        let mut tags: Vec<usize> = sorted.iter().map(|v| v.tag).collect();
        tags.sort();
        assert_eq!(tags, [0, 1, 2, 3, 4, 5]);
    }
}
