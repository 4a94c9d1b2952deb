//! Hamming ranking and retrieval-quality evaluation for binary hash codes.
//!
//! Real-valued hash vectors flow through four stages:
//!
//! 1. [`binarize`] packs each row into a 64-bit code by sign.
//! 2. [`distance`] computes all-pairs Hamming distances.
//! 3. [`ranking`] argsorts each distance row with a stable 65-bucket counting sort.
//! 4. [`metrics`] scores rankings against labels: mAP plus precision/recall curves.
//!
//! # Public API Surface
//!
//! ## Entry Points
//! - [`hamming_distance`], [`rank`], [`hamming_rank`]
//! - [`mean_average_precision`], [`mean_average_precision_from_hashes`] and their
//!   `_with` variants taking a [`Relevance`] mode
//!
//! ## Data Types
//! - [`HashMatrix`] borrows caller input; [`DistanceMatrix`], [`RankMatrix`] and
//!   [`MapResult`] are owned outputs
//! - [`ShapeError`] is the single validation error
//!
//! ## Tooling
//! - [`reference`] is a slow oracle for cross-checking
//! - [`synthetic`] generates seeded, class-clustered datasets
//! - [`EvalConfig`] drives the `hashrank` benchmark binary
//!
//! Every call is synchronous and single-threaded, and shares no state with
//! other calls.

pub mod binarize;
pub mod config;
pub mod constants;
pub mod distance;
pub mod matrix;
pub mod metrics;
pub mod ranking;
pub mod reference;
pub mod synthetic;

pub use binarize::{Code, CodeVector, CodeWidth, binarize, binarize_row};
pub use config::{ConfigError, EvalConfig};
pub use constants::{
    DISTANCE_BUCKETS, MAX_DISTANCE, MAX_HASH_BITS, NARROW_CODE_BITS, validate_hash_width,
};
pub use distance::{distances_into, hamming, hamming_distance};
pub use matrix::{DistanceMatrix, HashMatrix, Label, RankMatrix, ShapeError, ShapeResult};
pub use metrics::{
    HashRanking, MapResult, PrecomputedRanking, QueryRanking, Relevance, evaluate,
    mean_average_precision, mean_average_precision_from_hashes,
    mean_average_precision_from_hashes_with, mean_average_precision_with,
};
pub use ranking::{argsort_row, hamming_rank, rank};
pub use synthetic::{SyntheticDataset, SyntheticSpec};
