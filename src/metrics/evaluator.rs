use std::time::Instant;

use tracing::{debug, trace};

use crate::distance::validate_hash_pair;
use crate::matrix::{HashMatrix, Label, RankMatrix, ShapeError, ShapeResult};

use super::source::{HashRanking, PrecomputedRanking, QueryRanking};
use super::types::{MapResult, Relevance};

/// Running sums over queries for mAP and the precision/recall curves.
#[derive(Debug)]
struct MapAccumulator {
    top_n: usize,
    relevance: Relevance,
    hits: Vec<bool>,
    precision_sum: Vec<f64>,
    recall_sum: Vec<f64>,
    ap_sum: f64,
    queries: usize,
    contributing: usize,
}

impl MapAccumulator {
    fn new(top_n: usize, relevance: Relevance) -> Self {
        Self {
            top_n,
            relevance,
            hits: vec![false; top_n],
            precision_sum: vec![0.0; top_n],
            recall_sum: vec![0.0; top_n],
            ap_sum: 0.0,
            queries: 0,
            contributing: 0,
        }
    }

    /// Folds one query into the sums and returns its average precision, or
    /// `None` if nothing relevant made it into the top `top_n`.
    fn add_query(&mut self, ranking: &[u32], labels_db: &[Label], query_label: Label) -> Option<f64> {
        self.queries += 1;

        let total_relevant = labels_db
            .iter()
            .filter(|&&l| self.relevance.is_relevant(l, query_label))
            .count();
        for (slot, &idx) in self.hits.iter_mut().zip(ranking) {
            *slot = self.relevance.is_relevant(labels_db[idx as usize], query_label);
        }

        let relevant_in_top_n = self.hits.iter().filter(|&&h| h).count();
        if relevant_in_top_n == 0 {
            return None;
        }

        let mut cumulative = 0u32;
        let mut ap = 0.0f64;
        for (i, &hit) in self.hits.iter().enumerate() {
            cumulative += u32::from(hit);
            let precision = cumulative as f32 / (i + 1) as f32;
            let recall = cumulative as f64 / total_relevant as f64;

            self.precision_sum[i] += precision as f64;
            self.recall_sum[i] += recall;
            if hit {
                ap += precision as f64;
            }
        }
        ap /= relevant_in_top_n as f64;

        self.ap_sum += ap;
        self.contributing += 1;
        Some(ap)
    }

    fn finish(self) -> MapResult {
        let q = self.queries as f64;
        MapResult {
            map: self.ap_sum / q,
            precision: self.precision_sum.iter().map(|s| (s / q) as f32).collect(),
            recall: self.recall_sum.iter().map(|s| (s / q) as f32).collect(),
            query_count: self.queries,
            contributing_queries: self.contributing,
        }
    }
}

/// Checks label counts and `top_n` against the ranking shape and resolves
/// `top_n == 0` to the full database size.
pub(crate) fn resolve_top_n(
    query_count: usize,
    db_size: usize,
    labels_db: &[Label],
    labels_query: &[Label],
    top_n: usize,
) -> ShapeResult<usize> {
    if labels_query.len() != query_count {
        return Err(ShapeError::LabelCount {
            what: "query",
            expected: query_count,
            actual: labels_query.len(),
        });
    }
    if labels_db.len() != db_size {
        return Err(ShapeError::LabelCount {
            what: "database",
            expected: db_size,
            actual: labels_db.len(),
        });
    }
    if top_n > db_size {
        return Err(ShapeError::TopNOutOfRange { top_n, db_size });
    }
    if query_count == 0 {
        return Err(ShapeError::Empty { what: "query set" });
    }
    if db_size == 0 {
        return Err(ShapeError::Empty { what: "database" });
    }
    Ok(if top_n == 0 { db_size } else { top_n })
}

/// Rejects a ranking row that is not `db_size` long or addresses a missing item.
fn check_ranking(query: usize, ranking: &[u32], db_size: usize) -> ShapeResult<()> {
    if ranking.len() != db_size {
        return Err(ShapeError::RankingLength {
            query,
            expected: db_size,
            actual: ranking.len(),
        });
    }
    if let Some(&index) = ranking.iter().find(|&&i| i as usize >= db_size) {
        return Err(ShapeError::RankIndexOutOfRange {
            row: query,
            index,
            cols: db_size,
        });
    }
    Ok(())
}

/// Scores every ranking produced by `source` against the labels.
///
/// This is the single aggregation path behind both public entry points; use
/// it directly to evaluate rankings from a custom [`QueryRanking`].
pub fn evaluate<R: QueryRanking>(
    source: &mut R,
    labels_db: &[Label],
    labels_query: &[Label],
    top_n: usize,
    relevance: Relevance,
) -> ShapeResult<MapResult> {
    let query_count = source.query_count();
    let db_size = source.db_size();
    let top_n = resolve_top_n(query_count, db_size, labels_db, labels_query, top_n)?;

    debug!(
        queries = query_count,
        db_size,
        top_n,
        relevance = %relevance,
        "Evaluating mean average precision"
    );
    let started = Instant::now();

    let mut acc = MapAccumulator::new(top_n, relevance);
    for (q, &label) in labels_query.iter().enumerate() {
        let ranking = source.ranking(q);
        check_ranking(q, ranking, db_size)?;
        if acc.add_query(ranking, labels_db, label).is_none() {
            trace!(query = q, label, "No relevant item in top_n, query skipped");
        }
    }
    let result = acc.finish();

    debug!(
        map = result.map,
        contributing = result.contributing_queries,
        elapsed_us = started.elapsed().as_micros() as u64,
        "Mean average precision computed"
    );

    Ok(result)
}

/// mAP and precision/recall curves for a precomputed ranking, with exact label matching.
///
/// `top_n == 0` evaluates the full ranking.
pub fn mean_average_precision(
    rank: &RankMatrix,
    labels_db: &[Label],
    labels_query: &[Label],
    top_n: usize,
) -> ShapeResult<MapResult> {
    mean_average_precision_with(rank, labels_db, labels_query, top_n, Relevance::Exact)
}

pub fn mean_average_precision_with(
    rank: &RankMatrix,
    labels_db: &[Label],
    labels_query: &[Label],
    top_n: usize,
    relevance: Relevance,
) -> ShapeResult<MapResult> {
    evaluate(
        &mut PrecomputedRanking::new(rank),
        labels_db,
        labels_query,
        top_n,
        relevance,
    )
}

/// mAP and precision/recall curves straight from real-valued hashes, with exact label matching.
///
/// Ranks one query at a time, so neither the full distance matrix nor the
/// full rank matrix is ever allocated.
pub fn mean_average_precision_from_hashes(
    hashes_db: &HashMatrix<'_>,
    hashes_query: &HashMatrix<'_>,
    labels_db: &[Label],
    labels_query: &[Label],
    top_n: usize,
) -> ShapeResult<MapResult> {
    mean_average_precision_from_hashes_with(
        hashes_db,
        hashes_query,
        labels_db,
        labels_query,
        top_n,
        Relevance::Exact,
    )
}

pub fn mean_average_precision_from_hashes_with(
    hashes_db: &HashMatrix<'_>,
    hashes_query: &HashMatrix<'_>,
    labels_db: &[Label],
    labels_query: &[Label],
    top_n: usize,
    relevance: Relevance,
) -> ShapeResult<MapResult> {
    validate_hash_pair(hashes_db, hashes_query)?;
    resolve_top_n(
        hashes_query.rows(),
        hashes_db.rows(),
        labels_db,
        labels_query,
        top_n,
    )?;

    let mut source = HashRanking::new(hashes_db, hashes_query)?;
    evaluate(&mut source, labels_db, labels_query, top_n, relevance)
}
