use serde::Serialize;

use crate::matrix::Label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
/// How a database label is matched against a query label.
pub enum Relevance {
    #[default]
    /// Relevant iff the labels are equal (single class per item).
    Exact,
    /// Labels are multi-hot bitmasks; relevant iff they share a set bit.
    SharedBits,
}

impl Relevance {
    #[inline]
    pub fn is_relevant(&self, db: Label, query: Label) -> bool {
        match self {
            Relevance::Exact => db == query,
            Relevance::SharedBits => db & query != 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relevance::Exact => "exact",
            Relevance::SharedBits => "shared-bits",
        }
    }
}

impl std::str::FromStr for Relevance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" | "equal" => Ok(Self::Exact),
            "shared-bits" | "shared_bits" | "and" => Ok(Self::SharedBits),
            _ => Err(format!("unknown relevance mode: {}", s)),
        }
    }
}

impl std::fmt::Display for Relevance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Retrieval quality over a query set, truncated at `top_n`.
pub struct MapResult {
    /// Mean Average Precision.
    pub map: f64,
    /// Averaged precision at each depth `1..=top_n`.
    pub precision: Vec<f32>,
    /// Averaged recall at each depth `1..=top_n`.
    pub recall: Vec<f32>,
    /// Number of queries evaluated (the divisor of every average).
    pub query_count: usize,
    /// Queries with at least one relevant item within `top_n`.
    ///
    /// Queries without one add zero to every sum but still count in
    /// `query_count`.
    pub contributing_queries: usize,
}

impl MapResult {
    pub fn top_n(&self) -> usize {
        self.precision.len()
    }

    /// Averaged precision at depth `k` (1-based).
    pub fn precision_at(&self, k: usize) -> Option<f32> {
        k.checked_sub(1).and_then(|i| self.precision.get(i).copied())
    }

    /// Averaged recall at depth `k` (1-based).
    pub fn recall_at(&self, k: usize) -> Option<f32> {
        k.checked_sub(1).and_then(|i| self.recall.get(i).copied())
    }
}
