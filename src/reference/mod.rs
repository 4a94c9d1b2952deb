//! Straightforward oracle for the fast pipeline.
//!
//! Compares signs column by column, sorts with a comparison-based stable sort
//! and scores against a dense relevance matrix. Slow, but each step is easy to
//! check by eye. Results must match the fast path exactly.


use crate::distance::validate_hash_pair;
use crate::matrix::{DistanceMatrix, HashMatrix, Label, RankMatrix, ShapeResult};
use crate::metrics::{MapResult, Relevance};

/// Distance matrix computed by comparing the sign of every column pair.
pub fn sign_distance(db: &HashMatrix<'_>, query: &HashMatrix<'_>) -> ShapeResult<DistanceMatrix> {
    validate_hash_pair(db, query)?;
    let mut data = Vec::with_capacity(query.rows() * db.rows());
    for q in query.iter_rows() {
        for n in db.iter_rows() {
            let differing = q
                .iter()
                .zip(n)
                .filter(|&(&a, &b)| (a > 0.0) != (b > 0.0))
                .count();
            data.push(differing as u8);
        }
    }
    DistanceMatrix::from_vec(data, query.rows(), db.rows())
}

/// Per-row stable comparison sort of a distance matrix.
pub fn stable_argsort(distances: &DistanceMatrix) -> ShapeResult<RankMatrix> {
    let (rows, cols) = distances.shape();
    let mut data = Vec::with_capacity(rows * cols);
    for q in 0..rows {
        let row = distances.row(q);
        let mut order: Vec<u32> = (0..cols as u32).collect();
        order.sort_by_key(|&i| row[i as usize]);
        data.extend(order);
    }
    RankMatrix::from_vec(data, rows, cols)
}

/// Dense `Q x N` relevance matrix.
pub fn relevance_matrix(
    labels_db: &[Label],
    labels_query: &[Label],
    relevance: Relevance,
) -> Vec<Vec<bool>> {
    labels_query
        .iter()
        .map(|&q| labels_db.iter().map(|&n| relevance.is_relevant(n, q)).collect())
        .collect()
}

/// mAP from a ranking and a dense relevance matrix. `top_n == 0` means the full ranking.
///
/// Expects `rank` and `similar` to have matching shapes and a non-empty query set.
pub fn map_from_relevance(rank: &RankMatrix, similar: &[Vec<bool>], top_n: usize) -> MapResult {
    let (query_count, db_size) = rank.shape();
    let top_n = if top_n == 0 { db_size } else { top_n };

    let mut map = 0.0f64;
    let mut av_precision = vec![0.0f64; top_n];
    let mut av_recall = vec![0.0f64; top_n];
    let mut contributing = 0;

    for (q, s) in similar.iter().enumerate() {
        let total_relevant = s.iter().filter(|&&r| r).count();
        let relevance: Vec<bool> = rank.row(q)[..top_n]
            .iter()
            .map(|&i| s[i as usize])
            .collect();
        let cumulative: Vec<u32> = relevance
            .iter()
            .scan(0u32, |acc, &r| {
                *acc += u32::from(r);
                Some(*acc)
            })
            .collect();

        let found = cumulative[top_n - 1];
        if found == 0 {
            continue;
        }
        contributing += 1;

        let precision: Vec<f32> = cumulative
            .iter()
            .enumerate()
            .map(|(i, &c)| c as f32 / (i + 1) as f32)
            .collect();
        let recall: Vec<f64> = cumulative
            .iter()
            .map(|&c| c as f64 / total_relevant as f64)
            .collect();

        for i in 0..top_n {
            av_precision[i] += precision[i] as f64;
            av_recall[i] += recall[i];
        }

        let mut ap = 0.0f64;
        for (p, &r) in precision.iter().zip(&relevance) {
            if r {
                ap += *p as f64;
            }
        }
        map += ap / found as f64;
    }

    let q = query_count as f64;
    MapResult {
        map: map / q,
        precision: av_precision.iter().map(|s| (s / q) as f32).collect(),
        recall: av_recall.iter().map(|s| (s / q) as f32).collect(),
        query_count,
        contributing_queries: contributing,
    }
}

/// End-to-end oracle: sign distance, stable sort, dense scoring.
pub fn mean_average_precision(
    hashes_db: &HashMatrix<'_>,
    hashes_query: &HashMatrix<'_>,
    labels_db: &[Label],
    labels_query: &[Label],
    top_n: usize,
    relevance: Relevance,
) -> ShapeResult<MapResult> {
    crate::metrics::resolve_top_n(
        hashes_query.rows(),
        hashes_db.rows(),
        labels_db,
        labels_query,
        top_n,
    )?;
    let distances = sign_distance(hashes_db, hashes_query)?;
    let rank = stable_argsort(&distances)?;
    let similar = relevance_matrix(labels_db, labels_query, relevance);
    Ok(map_from_relevance(&rank, &similar, top_n))
}
