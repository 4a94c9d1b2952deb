//! Cross-cutting numeric bounds.
//!
//! Every bound below follows from a single invariant: a hash code is at most
//! [`MAX_HASH_BITS`] wide. Derive secondary constants from it rather than
//! restating numbers in other modules.

use crate::matrix::{ShapeError, ShapeResult};

/// Widest hash accepted by any entry point.
pub const MAX_HASH_BITS: usize = 64;

/// Largest possible Hamming distance between two codes.
pub const MAX_DISTANCE: u8 = MAX_HASH_BITS as u8;

/// Number of distinct distance values (`0..=MAX_DISTANCE`), i.e. counting-sort buckets.
pub const DISTANCE_BUCKETS: usize = MAX_HASH_BITS + 1;

/// Hashes up to this width fit a 32-bit code.
pub const NARROW_CODE_BITS: usize = 32;

/// Checks that a hash width can be packed into a single code.
///
/// # Example
///
/// ```
/// use hashrank::constants::{validate_hash_width, MAX_HASH_BITS};
///
/// assert!(validate_hash_width(48).is_ok());
/// assert!(validate_hash_width(MAX_HASH_BITS + 1).is_err());
/// ```
pub fn validate_hash_width(width: usize) -> ShapeResult<()> {
    if width > MAX_HASH_BITS {
        return Err(ShapeError::WidthTooLarge {
            width,
            max: MAX_HASH_BITS,
        });
    }
    Ok(())
}
