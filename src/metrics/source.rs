//! Where each query's ranking comes from.

use crate::binarize::{CodeVector, binarize};
use crate::distance::{distances_into, validate_hash_pair};
use crate::matrix::{HashMatrix, RankMatrix, ShapeResult};
use crate::ranking::argsort_row;

/// Supplies one ranking of database indices per query, nearest first.
///
/// Implementations may compute rankings lazily; the evaluator asks for each
/// query exactly once, in order.
pub trait QueryRanking {
    fn query_count(&self) -> usize;

    fn db_size(&self) -> usize;

    /// Ranking for query `q`. Must be `db_size()` long with every index below `db_size()`;
    /// [`evaluate`](super::evaluate) returns an error for any row that is not.
    fn ranking(&mut self, q: usize) -> &[u32];
}

/// Rankings read from an already materialized [`RankMatrix`].
#[derive(Debug, Clone, Copy)]
pub struct PrecomputedRanking<'a> {
    rank: &'a RankMatrix,
}

impl<'a> PrecomputedRanking<'a> {
    pub fn new(rank: &'a RankMatrix) -> Self {
        Self { rank }
    }
}

impl QueryRanking for PrecomputedRanking<'_> {
    fn query_count(&self) -> usize {
        self.rank.rows()
    }

    fn db_size(&self) -> usize {
        self.rank.cols()
    }

    fn ranking(&mut self, q: usize) -> &[u32] {
        self.rank.row(q)
    }
}

/// Rankings computed one query at a time from binarized hashes.
///
/// Holds one distance row and one rank row, so memory stays O(N) no matter
/// how many queries there are.
#[derive(Debug, Clone)]
pub struct HashRanking {
    db_codes: CodeVector,
    query_codes: CodeVector,
    distances: Vec<u8>,
    order: Vec<u32>,
}

impl HashRanking {
    pub fn new(db: &HashMatrix<'_>, query: &HashMatrix<'_>) -> ShapeResult<Self> {
        validate_hash_pair(db, query)?;
        let db_codes = binarize(db)?;
        let query_codes = binarize(query)?;
        let n = db_codes.len();
        Ok(Self {
            db_codes,
            query_codes,
            distances: vec![0; n],
            order: vec![0; n],
        })
    }
}

impl QueryRanking for HashRanking {
    fn query_count(&self) -> usize {
        self.query_codes.len()
    }

    fn db_size(&self) -> usize {
        self.db_codes.len()
    }

    fn ranking(&mut self, q: usize) -> &[u32] {
        let code = self.query_codes.as_slice()[q];
        distances_into(code, self.db_codes.as_slice(), &mut self.distances);
        argsort_row(&self.distances, &mut self.order);
        &self.order
    }
}
