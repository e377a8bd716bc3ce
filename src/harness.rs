//! Wall-clock timing of the sorting algorithms over random inputs.
//!
//! [`measure`] generates one random sequence per requested size, hands every
//! [`Algorithm`] its own copy, and brackets each call with a monotonic clock.
//! Durations are environment-dependent; only their relative trend is meaningful.

use std::hint::black_box;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::{bubble_sort, merge_sort, quick_sort};

/// The sorting algorithms under measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Merge,
    Quick,
}

impl Algorithm {
    /// All algorithms, in reporting order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Merge, Algorithm::Quick];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Merge => "merge_sort",
            Algorithm::Quick => "quick_sort",
        }
    }

    /// Sorts `values`, consuming them. Taking the vector by value makes each
    /// call's input an independent copy: bubble sort mutates only the vector
    /// it was given, so no measurement sees a predecessor's output.
    pub fn sort(self, mut values: Vec<i64>) -> Vec<i64> {
        match self {
            Algorithm::Bubble => {
                bubble_sort(&mut values);
                values
            }
            Algorithm::Merge => merge_sort(&values),
            Algorithm::Quick => quick_sort(&values),
        }
    }
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("empty value range: min {min} exceeds max {max}")]
    EmptyValueRange { min: i64, max: i64 },
    #[error("trials must be at least 1")]
    ZeroTrials,
}

/// Durations per `(algorithm, size)` pair from one harness run.
///
/// Each algorithm's durations are aligned with [`Measurements::sizes`], in the
/// order the sizes were tested.
#[derive(Clone, Debug)]
pub struct Measurements {
    sizes: Vec<usize>,
    rows: Vec<(Algorithm, Vec<Duration>)>,
}

impl Measurements {
    /// The tested input sizes, in order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Durations for `algorithm`, one per tested size; empty if the algorithm
    /// was not part of the run.
    pub fn timings(&self, algorithm: Algorithm) -> &[Duration] {
        self.rows
            .iter()
            .find(|(algo, _)| *algo == algorithm)
            .map(|(_, timings)| timings.as_slice())
            .unwrap_or(&[])
    }

    pub fn rows(&self) -> impl Iterator<Item = (Algorithm, &[Duration])> {
        self.rows
            .iter()
            .map(|(algo, timings)| (*algo, timings.as_slice()))
    }
}

#[inline]
fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

fn draw(state: &mut u64, min: i64, max: i64) -> i64 {
    let width = (max as u64).wrapping_sub(min as u64).wrapping_add(1);
    if width == 0 {
        // The range spans all of i64; every u64 draw maps to a valid value.
        return next_u64(state) as i64;
    }
    min.wrapping_add((next_u64(state) % width) as i64)
}

fn fill(state: &mut u64, len: usize, min: i64, max: i64) -> Vec<i64> {
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(draw(state, min, max));
    }
    values
}

/// Generates `len` integers drawn uniformly from `min..=max`.
///
/// Deterministic for a given seed. Fails if the range is empty.
pub fn random_values(len: usize, min: i64, max: i64, seed: u64) -> Result<Vec<i64>, HarnessError> {
    if min > max {
        return Err(HarnessError::EmptyValueRange { min, max });
    }
    let mut state = seed;
    Ok(fill(&mut state, len, min, max))
}

/// Times all three algorithms once per size. See [`measure_trials`].
pub fn measure(
    sizes: &[usize],
    min: i64,
    max: i64,
    seed: u64,
) -> Result<Measurements, HarnessError> {
    measure_trials(&Algorithm::ALL, sizes, min, max, 1, seed)
}

/// Times each algorithm against an independent copy of one random sequence
/// per size, recording the mean wall-clock duration across `trials` runs.
///
/// The inputs depend only on `seed` and `sizes`, so narrowing `algorithms`
/// never changes what the remaining ones are measured against. A run either
/// completes with a full [`Measurements`] or fails up front; there is no
/// partial result.
pub fn measure_trials(
    algorithms: &[Algorithm],
    sizes: &[usize],
    min: i64,
    max: i64,
    trials: usize,
    seed: u64,
) -> Result<Measurements, HarnessError> {
    if min > max {
        return Err(HarnessError::EmptyValueRange { min, max });
    }
    if trials == 0 {
        return Err(HarnessError::ZeroTrials);
    }

    let mut rows: Vec<(Algorithm, Vec<Duration>)> = algorithms
        .iter()
        .map(|&algo| (algo, Vec::with_capacity(sizes.len())))
        .collect();

    let mut state = seed;
    for &len in sizes {
        let input = fill(&mut state, len, min, max);
        for (algo, timings) in rows.iter_mut() {
            let mut total = Duration::ZERO;
            for _ in 0..trials {
                let trial_input = input.clone();
                let start = Instant::now();
                let sorted = algo.sort(black_box(trial_input));
                total += start.elapsed();
                black_box(sorted);
            }
            timings.push(total / trials as u32);
        }
    }

    Ok(Measurements {
        sizes: sizes.to_vec(),
        rows,
    })
}
