//! Mean Average Precision and precision/recall curves for Hamming rankings.
//!
//! Two entry points share one aggregation routine ([`evaluate`]) and differ
//! only in where each query's ranking comes from:
//!
//! - [`mean_average_precision`] reads a precomputed [`RankMatrix`](crate::matrix::RankMatrix).
//! - [`mean_average_precision_from_hashes`] binarizes, measures and ranks one
//!   query at a time via [`HashRanking`].
//!
//! # Averaging
//!
//! For each query, relevance is taken over the first `top_n` ranked items, but
//! the recall denominator counts relevant items over the whole ranking. A
//! query with nothing relevant in its top `top_n` adds zero to every running
//! sum, yet all sums are divided by the total number of queries. Such queries
//! therefore pull mAP and both curves toward zero; [`MapResult::contributing_queries`]
//! reports how many queries actually contributed.

pub mod evaluator;
pub mod source;
pub mod types;


pub(crate) use evaluator::resolve_top_n;
pub use evaluator::{
    evaluate, mean_average_precision, mean_average_precision_from_hashes,
    mean_average_precision_from_hashes_with, mean_average_precision_with,
};
pub use source::{HashRanking, PrecomputedRanking, QueryRanking};
pub use types::{MapResult, Relevance};
