//! Matrix views and owned result buffers shared by every stage.
//!
//! Inputs are borrowed ([`HashMatrix`]); outputs ([`DistanceMatrix`],
//! [`RankMatrix`]) are freshly allocated and owned by the caller. Nothing
//! aliases between the two.

pub mod error;
pub mod types;


pub use error::{ShapeError, ShapeResult};
pub use types::{DistanceMatrix, HashMatrix, Label, RankMatrix};
