//! All-pairs Hamming distance between query and database codes.

#[cfg(test)]
mod tests;

use std::time::Instant;

use tracing::debug;

use crate::binarize::{Code, binarize};
use crate::constants::validate_hash_width;
use crate::matrix::{DistanceMatrix, HashMatrix, ShapeError, ShapeResult};

/// Number of differing bits between two codes (`0..=64`).
#[inline]
pub fn hamming(a: Code, b: Code) -> u8 {
    (a ^ b).count_ones() as u8
}

/// Fills `out[n]` with the distance from `query` to `db[n]`.
///
/// `out` must be exactly as long as `db`.
#[inline]
pub fn distances_into(query: Code, db: &[Code], out: &mut [u8]) {
    debug_assert_eq!(db.len(), out.len());
    for (slot, &code) in out.iter_mut().zip(db) {
        *slot = hamming(code, query);
    }
}

/// Checks that database and query hashes can be compared bit for bit.
pub(crate) fn validate_hash_pair(db: &HashMatrix<'_>, query: &HashMatrix<'_>) -> ShapeResult<()> {
    if db.width() != query.width() {
        return Err(ShapeError::WidthMismatch {
            db: db.width(),
            query: query.width(),
        });
    }
    validate_hash_width(db.width())
}

/// Computes the `query.rows() x db.rows()` distance matrix.
///
/// Both matrices must have the same width, at most 64 bits.
pub fn hamming_distance(
    db: &HashMatrix<'_>,
    query: &HashMatrix<'_>,
) -> ShapeResult<DistanceMatrix> {
    validate_hash_pair(db, query)?;

    debug!(
        db_rows = db.rows(),
        query_rows = query.rows(),
        width = db.width(),
        "Computing Hamming distances"
    );
    let started = Instant::now();

    let db_codes = binarize(db)?;
    let query_codes = binarize(query)?;

    let cols = db_codes.len();
    let mut data = vec![0u8; query_codes.len() * cols];
    if cols > 0 {
        for (row, &q) in data.chunks_exact_mut(cols).zip(query_codes.as_slice()) {
            distances_into(q, db_codes.as_slice(), row);
        }
    }

    debug!(
        elapsed_us = started.elapsed().as_micros() as u64,
        "Hamming distances computed"
    );

    Ok(DistanceMatrix::from_parts(data, query_codes.len(), cols))
}
