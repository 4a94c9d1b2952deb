use crate::constants::MAX_DISTANCE;

use super::error::{ShapeError, ShapeResult};

/// Class or identity id attached to a database or query item.
pub type Label = i64;

fn two_dims(shape: &[usize]) -> ShapeResult<(usize, usize)> {
    match *shape {
        [rows, cols] => Ok((rows, cols)),
        _ => Err(ShapeError::NotTwoDimensional { ndim: shape.len() }),
    }
}

fn check_len(len: usize, rows: usize, cols: usize) -> ShapeResult<()> {
    let expected = rows.saturating_mul(cols);
    if len != expected {
        return Err(ShapeError::DataLength {
            rows,
            cols,
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Read-only, row-major view over real-valued hash activations.
///
/// The sign of each element is its bit. The view borrows the caller's buffer
/// and never copies it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HashMatrix<'a> {
    data: &'a [f32],
    rows: usize,
    width: usize,
}

impl<'a> HashMatrix<'a> {
    /// Wraps `data` as a `rows x width` matrix.
    pub fn new(data: &'a [f32], rows: usize, width: usize) -> ShapeResult<Self> {
        check_len(data.len(), rows, width)?;
        Ok(Self { data, rows, width })
    }

    /// Wraps `data` using a host-style shape descriptor, which must have exactly two entries.
    pub fn from_shape(data: &'a [f32], shape: &[usize]) -> ShapeResult<Self> {
        let (rows, width) = two_dims(shape)?;
        Self::new(data, rows, width)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, i.e. bits per hash.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns row `index`. Panics if out of bounds, like slice indexing.
    pub fn row(&self, index: usize) -> &'a [f32] {
        let start = index * self.width;
        &self.data[start..start + self.width]
    }

    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &'a [f32]> + 'a {
        let view = *self;
        (0..self.rows).map(move |r| view.row(r))
    }

    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }
}

/// Owned `Q x N` matrix of Hamming distances, each in `0..=64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl DistanceMatrix {
    /// Takes ownership of caller-provided distances, rejecting values above 64.
    pub fn from_vec(data: Vec<u8>, rows: usize, cols: usize) -> ShapeResult<Self> {
        check_len(data.len(), rows, cols)?;
        if let Some(pos) = data.iter().position(|&d| d > MAX_DISTANCE) {
            return Err(ShapeError::DistanceOutOfRange {
                row: pos / cols,
                col: pos % cols,
                value: data[pos],
                max: MAX_DISTANCE,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Copies a host buffer described by a shape slice.
    pub fn from_shape(data: &[u8], shape: &[usize]) -> ShapeResult<Self> {
        let (rows, cols) = two_dims(shape)?;
        Self::from_vec(data.to_vec(), rows, cols)
    }

    /// Builds a matrix whose values were produced by the distance engine.
    pub(crate) fn from_parts(data: Vec<u8>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, index: usize) -> &[u8] {
        let start = index * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.row(row)[col]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

/// Owned `Q x N` matrix of database indices, one ranking per query row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankMatrix {
    data: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl RankMatrix {
    /// Takes ownership of an externally computed ranking.
    ///
    /// Every index must address a database column. Rows are not required to be
    /// permutations.
    pub fn from_vec(data: Vec<u32>, rows: usize, cols: usize) -> ShapeResult<Self> {
        check_len(data.len(), rows, cols)?;
        if let Some(pos) = data.iter().position(|&i| i as usize >= cols) {
            return Err(ShapeError::RankIndexOutOfRange {
                row: pos / cols,
                index: data[pos],
                cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn from_shape(data: &[u32], shape: &[usize]) -> ShapeResult<Self> {
        let (rows, cols) = two_dims(shape)?;
        Self::from_vec(data.to_vec(), rows, cols)
    }

    pub(crate) fn from_parts(data: Vec<u32>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, index: usize) -> &[u32] {
        let start = index * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.data
    }
}
