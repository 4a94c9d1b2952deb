//! Seeded generator for class-clustered hash datasets.
//!
//! Each class gets a random centre in `(-0.5, 0.5)^width`; every item is its
//! class centre plus `noise` times standard normal noise. The same `SyntheticSpec`
//! always yields the same dataset.


use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::{HashMatrix, Label, ShapeResult};

#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticSpec {
    pub db_size: usize,
    pub query_size: usize,
    pub class_count: usize,
    pub hash_bits: usize,
    pub noise: f32,
    pub seed: u64,
}

impl Default for SyntheticSpec {
    fn default() -> Self {
        Self {
            db_size: 1000,
            query_size: 200,
            class_count: 10,
            hash_bits: 64,
            noise: 0.3,
            seed: 42,
        }
    }
}

/// Generated hashes (row-major) and class labels for both sides.
#[derive(Debug, Clone)]
pub struct SyntheticDataset {
    pub hashes_db: Vec<f32>,
    pub hashes_query: Vec<f32>,
    pub labels_db: Vec<Label>,
    pub labels_query: Vec<Label>,
    pub hash_bits: usize,
}

impl SyntheticDataset {
    pub fn db(&self) -> ShapeResult<HashMatrix<'_>> {
        HashMatrix::new(&self.hashes_db, self.labels_db.len(), self.hash_bits)
    }

    pub fn query(&self) -> ShapeResult<HashMatrix<'_>> {
        HashMatrix::new(&self.hashes_query, self.labels_query.len(), self.hash_bits)
    }
}

/// Maps a class id to a single-bit mask, for use with shared-bit relevance.
///
/// # Panics
///
/// Panics in debug builds if `label` is negative or 64 and above. Ids must stay
/// below 63 for the mask to be positive.
/// [`EvalConfig::validate`](crate::EvalConfig::validate) caps the class count accordingly.
pub fn one_hot(label: Label) -> Label {
    1 << label
}

/// Standard normal sample (Box-Muller).
fn standard_normal<R: Rng>(rng: &mut R) -> f32 {
    // gen() is in [0, 1); flip it so ln never sees zero.
    let u1 = 1.0 - rng.r#gen::<f32>();
    let u2 = rng.r#gen::<f32>();
    (-2.0 * u1.ln()).sqrt() * (std::f32::consts::TAU * u2).cos()
}

fn sample_side<R: Rng>(
    rng: &mut R,
    centres: &[f32],
    spec: &SyntheticSpec,
    count: usize,
) -> (Vec<f32>, Vec<Label>) {
    let width = spec.hash_bits;
    let mut hashes = Vec::with_capacity(count * width);
    let mut labels = Vec::with_capacity(count);
    for _ in 0..count {
        let class = rng.gen_range(0..spec.class_count);
        let centre = &centres[class * width..(class + 1) * width];
        hashes.extend(centre.iter().map(|&c| c + spec.noise * standard_normal(rng)));
        labels.push(class as Label);
    }
    (hashes, labels)
}

/// Generates a dataset. `class_count` must be non-zero.
pub fn generate(spec: &SyntheticSpec) -> SyntheticDataset {
    let mut rng = StdRng::seed_from_u64(spec.seed);

    let centres: Vec<f32> = (0..spec.class_count * spec.hash_bits)
        .map(|_| rng.r#gen::<f32>() - 0.5)
        .collect();

    let (hashes_db, labels_db) = sample_side(&mut rng, &centres, spec, spec.db_size);
    let (hashes_query, labels_query) = sample_side(&mut rng, &centres, spec, spec.query_size);

    SyntheticDataset {
        hashes_db,
        hashes_query,
        labels_db,
        labels_query,
        hash_bits: spec.hash_bits,
    }
}
