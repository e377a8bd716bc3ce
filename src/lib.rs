//! Classic comparison sorts with an empirical timing harness.
//!
//! This crate pairs three textbook sorting algorithms with a small harness
//! that times each one against identical random inputs of increasing size,
//! making their complexity trade-offs visible as wall-clock numbers.
//!
//! # Algorithms
//!
//! - **Bubble sort** ([`bubble_sort`]) — in-place adjacent swaps; O(n²); stable
//! - **Merge sort** ([`merge_sort`]) — recursive split and stable merge; O(n log n)
//! - **Quick sort** ([`quick_sort`]) — middle pivot, three-way partition; O(n log n) average
//!
//! # Timing
//!
//! [`measure`] generates one random sequence per input size and times every
//! [`Algorithm`] against its own copy of it, producing per-(algorithm, size)
//! wall-clock durations ([`Measurements`]). The `perf_harness` binary wraps
//! this in a CLI.

mod harness;
mod sort;

pub use harness::*;
pub use sort::*;
