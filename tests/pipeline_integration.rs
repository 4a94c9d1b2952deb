//! End-to-end tests through the public API.

mod common;

use common::fixtures::{DatasetBuilder, TOP_N, hashes_from_codes};
use hashrank::{
    DistanceMatrix, HashMatrix, RankMatrix, Relevance, ShapeError, hamming_distance, hamming_rank,
    mean_average_precision, mean_average_precision_from_hashes, rank, reference,
};

#[test]
fn test_worked_example() {
    let db = hashes_from_codes(&[0b0000, 0b1111, 0b0011], 4);
    let query = hashes_from_codes(&[0b0001], 4);
    let db = HashMatrix::from_shape(&db, &[3, 4]).expect("2-D");
    let query = HashMatrix::from_shape(&query, &[1, 4]).expect("2-D");

    let distances = hamming_distance(&db, &query).expect("compatible");
    assert_eq!(distances.row(0), &[1, 3, 1]);

    let ranked = rank(&distances);
    assert_eq!(ranked.row(0), &[0, 2, 1]);

    let result = mean_average_precision(&ranked, &[0, 1, 0], &[0], 0).expect("valid");
    assert_eq!(result.map, 1.0);
}

#[test]
fn test_host_shapes_are_checked() {
    let flat = [1.0f32; 12];

    assert_eq!(
        HashMatrix::from_shape(&flat, &[12]).unwrap_err(),
        ShapeError::NotTwoDimensional { ndim: 1 }
    );
    assert_eq!(
        DistanceMatrix::from_shape(&[0u8; 12], &[2, 2, 3]).unwrap_err(),
        ShapeError::NotTwoDimensional { ndim: 3 }
    );
    assert!(RankMatrix::from_shape(&[0u32, 1, 1, 0], &[2, 2]).is_ok());
}

#[test]
fn test_external_rank_matches_internal_rank() {
    let data = DatasetBuilder::new().hash_bits(32).build();
    let db = data.db().expect("consistent");
    let query = data.query().expect("consistent");

    let internal = hamming_rank(&db, &query).expect("compatible");
    let external =
        RankMatrix::from_shape(internal.as_slice(), &[query.rows(), db.rows()]).expect("valid");

    let a = mean_average_precision(&internal, &data.labels_db, &data.labels_query, TOP_N)
        .expect("valid");
    let b = mean_average_precision(&external, &data.labels_db, &data.labels_query, TOP_N)
        .expect("valid");
    assert_eq!(a, b);
}

#[test]
fn test_all_paths_agree_across_widths() {
    for hash_bits in [24, 32, 48, 64] {
        let data = DatasetBuilder::new()
            .hash_bits(hash_bits)
            .seed(hash_bits as u64)
            .build();
        let db = data.db().expect("consistent");
        let query = data.query().expect("consistent");

        let oracle = reference::mean_average_precision(
            &db,
            &query,
            &data.labels_db,
            &data.labels_query,
            TOP_N,
            Relevance::Exact,
        )
        .expect("valid");

        let ranked = hamming_rank(&db, &query).expect("compatible");
        let from_rank = mean_average_precision(&ranked, &data.labels_db, &data.labels_query, TOP_N)
            .expect("valid");
        let from_hashes = mean_average_precision_from_hashes(
            &db,
            &query,
            &data.labels_db,
            &data.labels_query,
            TOP_N,
        )
        .expect("valid");

        assert_eq!(oracle, from_rank, "hash_bits {hash_bits}");
        assert_eq!(oracle, from_hashes, "hash_bits {hash_bits}");
        assert_eq!(from_hashes.top_n(), TOP_N);
    }
}

#[test]
fn test_narrow_and_wide_codes_give_identical_distances() {
    // Same 32 sign bits, padded with 16 always-negative columns.
    let narrow = DatasetBuilder::new().db_size(50).query_size(10).hash_bits(32).build();
    let pad = |src: &[f32]| -> Vec<f32> {
        src.chunks_exact(32)
            .flat_map(|row| row.iter().copied().chain(std::iter::repeat_n(-1.0, 16)))
            .collect()
    };
    let wide_db = pad(&narrow.hashes_db);
    let wide_query = pad(&narrow.hashes_query);

    let a = hamming_distance(
        &narrow.db().expect("consistent"),
        &narrow.query().expect("consistent"),
    )
    .expect("compatible");
    let b = hamming_distance(
        &HashMatrix::new(&wide_db, 50, 48).expect("valid"),
        &HashMatrix::new(&wide_query, 10, 48).expect("valid"),
    )
    .expect("compatible");

    assert_eq!(a, b);
}

#[test]
fn test_rank_rows_are_sorted_permutations() {
    let data = DatasetBuilder::new().db_size(300).query_size(20).build();
    let db = data.db().expect("consistent");
    let query = data.query().expect("consistent");
    let distances = hamming_distance(&db, &query).expect("compatible");
    let ranked = rank(&distances);

    for q in 0..query.rows() {
        let row = ranked.row(q);
        let mut sorted = row.to_vec();
        sorted.sort_unstable();
        assert!(sorted.iter().enumerate().all(|(i, &v)| i as u32 == v));

        for pair in row.windows(2) {
            let (a, b) = (distances.get(q, pair[0] as usize), distances.get(q, pair[1] as usize));
            assert!(a <= b);
            if a == b {
                assert!(pair[0] < pair[1]);
            }
        }
    }
}
