//! Shape validation errors.

use thiserror::Error;

/// A validation failure raised before any computation starts.
///
/// Every entry point checks its inputs up front and reports the first
/// constraint that does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The caller's array is not a matrix.
    #[error("number of dimensions must be two, got {ndim}")]
    NotTwoDimensional { ndim: usize },

    /// Buffer length does not match the declared shape.
    #[error("buffer holds {actual} elements but shape {rows}x{cols} requires {expected}")]
    DataLength {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    /// Database and query hashes have different widths.
    #[error("hash widths must match: database has {db} bits, query has {query}")]
    WidthMismatch { db: usize, query: usize },

    /// Hash is too wide to pack into a single code.
    #[error("hash width {width} exceeds the supported maximum of {max} bits")]
    WidthTooLarge { width: usize, max: usize },

    /// A label array does not line up with its matrix.
    #[error("{what} label count mismatch: expected {expected}, got {actual}")]
    LabelCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Requested truncation depth is deeper than the database.
    #[error("top_n {top_n} exceeds database size {db_size}")]
    TopNOutOfRange { top_n: usize, db_size: usize },

    /// A rank entry does not address a database column.
    #[error("rank[{row}] contains index {index}, database has {cols} items")]
    RankIndexOutOfRange { row: usize, index: u32, cols: usize },

    /// A ranking source returned a row that does not cover the database.
    #[error("ranking for query {query} has {actual} entries, database has {expected} items")]
    RankingLength {
        query: usize,
        expected: usize,
        actual: usize,
    },

    /// A distance entry is outside `0..=max`.
    #[error("distance[{row}][{col}] = {value} exceeds the maximum of {max}")]
    DistanceOutOfRange {
        row: usize,
        col: usize,
        value: u8,
        max: u8,
    },

    /// Evaluation needs at least one item on this side.
    #[error("{what} must not be empty")]
    Empty { what: &'static str },
}

pub type ShapeResult<T> = Result<T, ShapeError>;
