use super::*;

fn pseudo_random_hashes(rows: usize, width: usize, seed: u64) -> Vec<f32> {
    (0..rows * width)
        .map(|i| {
            let mixed = (seed.wrapping_mul(2654435761).wrapping_add(i as u64 * 40503)) % 1000;
            (mixed as f32 / 1000.0) - 0.5
        })
        .collect()
}

#[test]
fn test_hamming_basic() {
    assert_eq!(hamming(0b0000, 0b0000), 0);
    assert_eq!(hamming(0b0001, 0b1111), 3);
    assert_eq!(hamming(0, u64::MAX), 64);
}

#[test]
fn test_distances_into() {
    let db = [0b0000, 0b1111, 0b0011];
    let mut out = [0u8; 3];
    distances_into(0b0001, &db, &mut out);

    assert_eq!(out, [1, 3, 1]);
}

#[test]
fn test_hamming_distance_scenario() {
    let db = [
        -1.0, -1.0, -1.0, -1.0, //
        1.0, 1.0, 1.0, 1.0, //
        1.0, 1.0, -1.0, -1.0,
    ];
    let query = [1.0, -1.0, -1.0, -1.0];
    let db = HashMatrix::new(&db, 3, 4).expect("valid");
    let query = HashMatrix::new(&query, 1, 4).expect("valid");

    let d = hamming_distance(&db, &query).expect("compatible");

    assert_eq!(d.shape(), (1, 3));
    assert_eq!(d.row(0), &[1, 3, 1]);
}

#[test]
fn test_hamming_distance_symmetric_and_zero_diagonal() {
    for width in [1, 24, 32, 33, 48, 64] {
        let data = pseudo_random_hashes(20, width, width as u64);
        let m = HashMatrix::new(&data, 20, width).expect("valid");
        let d = hamming_distance(&m, &m).expect("compatible");

        for i in 0..20 {
            assert_eq!(d.get(i, i), 0, "width {width}: self distance must be zero");
            for j in 0..20 {
                assert_eq!(d.get(i, j), d.get(j, i), "width {width}: asymmetric at {i},{j}");
                assert!(d.get(i, j) as usize <= width);
            }
        }
    }
}

#[test]
fn test_hamming_distance_orientation() {
    let db_data = pseudo_random_hashes(7, 16, 1);
    let query_data = pseudo_random_hashes(3, 16, 2);
    let db = HashMatrix::new(&db_data, 7, 16).expect("valid");
    let query = HashMatrix::new(&query_data, 3, 16).expect("valid");

    let forward = hamming_distance(&db, &query).expect("compatible");
    let backward = hamming_distance(&query, &db).expect("compatible");

    assert_eq!(forward.shape(), (3, 7));
    assert_eq!(backward.shape(), (7, 3));
    for q in 0..3 {
        for n in 0..7 {
            assert_eq!(forward.get(q, n), backward.get(n, q));
        }
    }
}

#[test]
fn test_hamming_distance_width_mismatch() {
    let db = HashMatrix::new(&[1.0; 8], 2, 4).expect("valid");
    let query = HashMatrix::new(&[1.0; 6], 2, 3).expect("valid");

    assert_eq!(
        hamming_distance(&db, &query).unwrap_err(),
        ShapeError::WidthMismatch { db: 4, query: 3 }
    );
}

#[test]
fn test_hamming_distance_width_too_large() {
    let data = vec![1.0; 65];
    let m = HashMatrix::new(&data, 1, 65).expect("valid");

    assert_eq!(
        hamming_distance(&m, &m).unwrap_err(),
        ShapeError::WidthTooLarge { width: 65, max: 64 }
    );
}

#[test]
fn test_hamming_distance_empty_database() {
    let db = HashMatrix::new(&[], 0, 8).expect("valid");
    let query = HashMatrix::new(&[1.0; 16], 2, 8).expect("valid");

    let d = hamming_distance(&db, &query).expect("compatible");
    assert_eq!(d.shape(), (2, 0));
    assert!(d.as_slice().is_empty());
}
