//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An integer variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    IntParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A float variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    FloatParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A boolean variable was not one of the accepted spellings.
    #[error("invalid boolean {name}='{value}': expected true/false/1/0")]
    InvalidBool { name: &'static str, value: String },

    /// Relevance mode string was not recognised.
    #[error("invalid relevance mode '{value}': {reason}")]
    InvalidRelevance { value: String, reason: String },

    /// A size that must be positive was zero.
    #[error("{name} must be greater than zero")]
    ZeroValue { name: &'static str },

    /// Hash width outside `1..=max`.
    #[error("hash bits {value} out of range: must be between 1 and {max}")]
    HashBitsOutOfRange { value: usize, max: usize },

    /// Truncation depth deeper than the generated database.
    #[error("top_n {top_n} exceeds database size {db_size}")]
    TopNOutOfRange { top_n: usize, db_size: usize },

    /// Noise scale is negative or not finite.
    #[error("noise must be finite and non-negative, got {value}")]
    InvalidNoise { value: f32 },

    /// Too many classes to encode each as one bit of a label.
    #[error("shared-bits relevance supports at most {max} classes, got {class_count}")]
    TooManyClasses { class_count: usize, max: usize },
}
