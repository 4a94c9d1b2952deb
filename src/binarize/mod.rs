//! Sign binarization of real-valued hashes into packed integer codes.
//!
//! Column `y` of a hash row becomes bit `y` of its code, set iff the value is
//! strictly greater than `0.0`. Zeros, negative zeros and NaNs all map to 0.


use bitvec::prelude::*;

use crate::constants::{MAX_HASH_BITS, NARROW_CODE_BITS, validate_hash_width};
use crate::matrix::{HashMatrix, ShapeResult};

/// Packed binary code of one hash row. Bit 0 is column 0.
pub type Code = u64;

/// Smallest integer type able to hold a code of the given width.
///
/// Informational only: codes are always stored as [`Code`], which gives
/// identical distances for both widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeWidth {
    /// Up to 32 bits.
    Narrow,
    /// 33 to 64 bits.
    Wide,
}

impl CodeWidth {
    pub fn for_width(width: usize) -> Self {
        if width <= NARROW_CODE_BITS {
            CodeWidth::Narrow
        } else {
            CodeWidth::Wide
        }
    }

    pub fn bits(&self) -> usize {
        match self {
            CodeWidth::Narrow => NARROW_CODE_BITS,
            CodeWidth::Wide => MAX_HASH_BITS,
        }
    }
}

/// Packs one hash row into a code, bit `y` set iff `hash[y] > 0.0`.
///
/// # Panics
///
/// Panics if the row is wider than 64 values. [`binarize`] checks the width first.
#[inline]
pub fn binarize_row(hash: &[f32]) -> Code {
    debug_assert!(hash.len() <= MAX_HASH_BITS);
    let mut bits = BitArray::<[Code; 1], Lsb0>::ZERO;
    for (y, &val) in hash.iter().enumerate() {
        bits.set(y, val > 0.0);
    }
    bits.into_inner()[0]
}

/// Codes for every row of a hash matrix. Lives only as long as the call that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeVector {
    codes: Vec<Code>,
    width: usize,
}

impl CodeVector {
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Hash width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn code_width(&self) -> CodeWidth {
        CodeWidth::for_width(self.width)
    }

    pub fn get(&self, index: usize) -> Option<Code> {
        self.codes.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }
}

/// Binarizes every row of `hashes`.
pub fn binarize(hashes: &HashMatrix<'_>) -> ShapeResult<CodeVector> {
    validate_hash_width(hashes.width())?;
    let codes = hashes.iter_rows().map(binarize_row).collect();
    Ok(CodeVector {
        codes,
        width: hashes.width(),
    })
}
