use super::*;
use crate::constants::MAX_DISTANCE;

fn is_permutation(row: &[u32]) -> bool {
    let mut seen = vec![false; row.len()];
    for &i in row {
        let i = i as usize;
        if i >= seen.len() || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

#[test]
fn test_argsort_basic() {
    let d = DistanceMatrix::from_vec(vec![1, 2, 1, 3], 2, 2).expect("valid");
    assert_eq!(rank(&d).as_slice(), &[0, 1, 0, 1]);

    let d = DistanceMatrix::from_vec(vec![2, 1, 3, 1], 2, 2).expect("valid");
    assert_eq!(rank(&d).as_slice(), &[1, 0, 1, 0]);

    let d = DistanceMatrix::from_vec(vec![2, 1, 1, 3], 2, 2).expect("valid");
    assert_eq!(rank(&d).as_slice(), &[1, 0, 0, 1]);
}

#[test]
fn test_argsort_ties_keep_index_order() {
    let distances = [5, 0, 5, 64, 0, 5, 0];
    let mut out = [0u32; 7];
    argsort_row(&distances, &mut out);

    assert_eq!(out, [1, 4, 6, 0, 2, 5, 3]);
}

#[test]
fn test_argsort_matches_stable_sort() {
    let cols = 300;
    let data: Vec<u8> = (0..4 * cols)
        .map(|i| ((i as u64).wrapping_mul(2654435761) % 65) as u8)
        .collect();
    let d = DistanceMatrix::from_vec(data, 4, cols).expect("valid");
    let ranked = rank(&d);

    for q in 0..4 {
        let row = d.row(q);
        let mut expected: Vec<u32> = (0..cols as u32).collect();
        expected.sort_by_key(|&i| row[i as usize]);

        assert_eq!(ranked.row(q), expected.as_slice());
        assert!(is_permutation(ranked.row(q)));
        for pair in ranked.row(q).windows(2) {
            let (a, b) = (row[pair[0] as usize], row[pair[1] as usize]);
            assert!(a < b || (a == b && pair[0] < pair[1]));
        }
    }
}

#[test]
fn test_rank_empty_shapes() {
    let d = DistanceMatrix::from_vec(vec![], 0, 5).expect("valid");
    assert_eq!(rank(&d).shape(), (0, 5));

    let d = DistanceMatrix::from_vec(vec![], 3, 0).expect("valid");
    assert_eq!(rank(&d).shape(), (3, 0));
}

#[test]
fn test_hamming_rank_single() {
    let one = HashMatrix::new(&[1.0], 1, 1).expect("valid");
    assert_eq!(hamming_rank(&one, &one).expect("compatible").as_slice(), &[0]);
}

#[test]
fn test_hamming_rank_three_by_three() {
    let query = [
        1.0, -1.0, -1.0, //
        -1.0, 1.0, -1.0, //
        1.0, 1.0, -1.0,
    ];
    let db = [
        1.0, -1.0, -1.0, //
        1.0, 1.0, -1.0, //
        -1.0, 1.0, -1.0,
    ];
    let query = HashMatrix::new(&query, 3, 3).expect("valid");
    let db = HashMatrix::new(&db, 3, 3).expect("valid");

    let ranked = hamming_rank(&db, &query).expect("compatible");

    assert_eq!(ranked.as_slice(), &[0, 1, 2, 2, 1, 0, 1, 0, 2]);
}

#[test]
#[should_panic]
fn test_argsort_row_panics_on_distance_past_max() {
    let mut out = [0u32; 2];
    argsort_row(&[1, MAX_DISTANCE + 1], &mut out);
}
