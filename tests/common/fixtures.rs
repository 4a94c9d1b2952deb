//! Test fixtures for integration tests.

#![allow(dead_code)]

use hashrank::synthetic::{SyntheticDataset, SyntheticSpec, generate};

pub const DB_SIZE: usize = 1000;

pub const QUERY_SIZE: usize = 200;

pub const CLASS_COUNT: usize = 10;

pub const TOP_N: usize = 500;

/// Expands packed codes into `±1.0` hash rows, bit `y` into column `y`.
pub fn hashes_from_codes(codes: &[u64], width: usize) -> Vec<f32> {
    codes
        .iter()
        .flat_map(|&code| {
            (0..width).map(move |y| if (code >> y) & 1 == 1 { 1.0 } else { -1.0 })
        })
        .collect()
}

#[derive(Default)]
pub struct DatasetBuilder {
    db_size: Option<usize>,
    query_size: Option<usize>,
    hash_bits: Option<usize>,
    noise: Option<f32>,
    seed: Option<u64>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn db_size(mut self, n: usize) -> Self {
        self.db_size = Some(n);
        self
    }

    pub fn query_size(mut self, n: usize) -> Self {
        self.query_size = Some(n);
        self
    }

    pub fn hash_bits(mut self, bits: usize) -> Self {
        self.hash_bits = Some(bits);
        self
    }

    pub fn noise(mut self, noise: f32) -> Self {
        self.noise = Some(noise);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> SyntheticDataset {
        generate(&SyntheticSpec {
            db_size: self.db_size.unwrap_or(DB_SIZE),
            query_size: self.query_size.unwrap_or(QUERY_SIZE),
            class_count: CLASS_COUNT,
            hash_bits: self.hash_bits.unwrap_or(64),
            noise: self.noise.unwrap_or(0.3),
            seed: self.seed.unwrap_or(1234),
        })
    }
}
