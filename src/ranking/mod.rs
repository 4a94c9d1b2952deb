//! Per-row argsort of Hamming distances.
//!
//! Distances live in `0..=64`, so each row is ordered with a 65-bucket
//! counting sort: O(N) time, a fixed stack array of counters, no comparisons.
//! Equal distances keep ascending column order.

#[cfg(test)]
mod tests;

use std::time::Instant;

use tracing::debug;

use crate::constants::DISTANCE_BUCKETS;
use crate::distance::hamming_distance;
use crate::matrix::{DistanceMatrix, HashMatrix, RankMatrix, ShapeResult};

/// Writes into `out` the column indices of `distances` ordered by ascending
/// distance, ties broken by ascending index.
///
/// `out` must be as long as `distances`.
///
/// # Panics
///
/// Panics if any distance is above 64. Values from [`crate::hamming_distance`]
/// and [`DistanceMatrix::from_vec`] are always in range.
pub fn argsort_row(distances: &[u8], out: &mut [u32]) {
    debug_assert_eq!(distances.len(), out.len());

    let mut count = [0usize; DISTANCE_BUCKETS];
    for &d in distances {
        count[d as usize] += 1;
    }

    // count[k] becomes one past the last output slot for distance k.
    for k in 1..DISTANCE_BUCKETS {
        count[k] += count[k - 1];
    }

    // Backward scan + pre-decrement keeps equal keys in index order.
    for (y, &d) in distances.iter().enumerate().rev() {
        let end = &mut count[d as usize];
        *end -= 1;
        out[*end] = y as u32;
    }
}

/// Ranks every row of a distance matrix.
pub fn rank(distances: &DistanceMatrix) -> RankMatrix {
    let (rows, cols) = distances.shape();
    debug!(rows, cols, "Ranking distance matrix");
    let started = Instant::now();

    let mut data = vec![0u32; rows * cols];
    if cols > 0 {
        for (q, out) in data.chunks_exact_mut(cols).enumerate() {
            argsort_row(distances.row(q), out);
        }
    }

    debug!(
        elapsed_us = started.elapsed().as_micros() as u64,
        "Ranking complete"
    );

    RankMatrix::from_parts(data, rows, cols)
}

/// Ranks database items for each query by Hamming distance.
///
/// Row `q` of the result lists database indices nearest-first for query `q`.
pub fn hamming_rank(db: &HashMatrix<'_>, query: &HashMatrix<'_>) -> ShapeResult<RankMatrix> {
    let distances = hamming_distance(db, query)?;
    Ok(rank(&distances))
}
