//! Environment-backed configuration for the evaluation binary.
//!
//! Every setting has a default. Override with `HASHRANK_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::constants::MAX_HASH_BITS;
use crate::metrics::Relevance;
use crate::synthetic::SyntheticSpec;

/// Largest class count whose one-hot labels fit a signed 64-bit label.
pub const MAX_BITMASK_CLASSES: usize = 63;

/// Benchmark configuration loaded from environment variables.
///
/// Use [`EvalConfig::from_env`] to read `HASHRANK_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalConfig {
    /// Database items to generate. Default: `10_000`.
    pub db_size: usize,

    /// Query items to generate. Default: `2_000`.
    pub query_size: usize,

    /// Number of distinct classes. Default: `10`.
    pub class_count: usize,

    /// Hash width in bits. Default: `64`.
    pub hash_bits: usize,

    /// Truncation depth; `0` evaluates the full ranking. Default: `0`.
    pub top_n: usize,

    /// Standard deviation of per-item noise around the class centre. Default: `0.3`.
    pub noise: f32,

    /// RNG seed. Default: `42`.
    pub seed: u64,

    /// Label matching rule. Default: exact.
    pub relevance: Relevance,

    /// Also run the reference implementation and compare. Default: `false`.
    pub verify: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            db_size: 10_000,
            query_size: 2_000,
            class_count: 10,
            hash_bits: MAX_HASH_BITS,
            top_n: 0,
            noise: 0.3,
            seed: 42,
            relevance: Relevance::Exact,
            verify: false,
        }
    }
}

impl EvalConfig {
    const ENV_DB_SIZE: &'static str = "HASHRANK_DB_SIZE";
    const ENV_QUERY_SIZE: &'static str = "HASHRANK_QUERY_SIZE";
    const ENV_CLASS_COUNT: &'static str = "HASHRANK_CLASS_COUNT";
    const ENV_HASH_BITS: &'static str = "HASHRANK_HASH_BITS";
    const ENV_TOP_N: &'static str = "HASHRANK_TOP_N";
    const ENV_NOISE: &'static str = "HASHRANK_NOISE";
    const ENV_SEED: &'static str = "HASHRANK_SEED";
    const ENV_RELEVANCE: &'static str = "HASHRANK_RELEVANCE";
    const ENV_VERIFY: &'static str = "HASHRANK_VERIFY";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Set but malformed variables are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            db_size: Self::parse_usize_from_env(Self::ENV_DB_SIZE, defaults.db_size)?,
            query_size: Self::parse_usize_from_env(Self::ENV_QUERY_SIZE, defaults.query_size)?,
            class_count: Self::parse_usize_from_env(Self::ENV_CLASS_COUNT, defaults.class_count)?,
            hash_bits: Self::parse_usize_from_env(Self::ENV_HASH_BITS, defaults.hash_bits)?,
            top_n: Self::parse_usize_from_env(Self::ENV_TOP_N, defaults.top_n)?,
            noise: Self::parse_f32_from_env(Self::ENV_NOISE, defaults.noise)?,
            seed: Self::parse_u64_from_env(Self::ENV_SEED, defaults.seed)?,
            relevance: Self::parse_relevance_from_env(defaults.relevance)?,
            verify: Self::parse_bool_from_env(Self::ENV_VERIFY, defaults.verify)?,
        })
    }

    /// Checks invariants the generator and evaluator rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_size == 0 {
            return Err(ConfigError::ZeroValue { name: "db_size" });
        }
        if self.query_size == 0 {
            return Err(ConfigError::ZeroValue { name: "query_size" });
        }
        if self.class_count == 0 {
            return Err(ConfigError::ZeroValue {
                name: "class_count",
            });
        }
        if self.hash_bits == 0 || self.hash_bits > MAX_HASH_BITS {
            return Err(ConfigError::HashBitsOutOfRange {
                value: self.hash_bits,
                max: MAX_HASH_BITS,
            });
        }
        if self.top_n > self.db_size {
            return Err(ConfigError::TopNOutOfRange {
                top_n: self.top_n,
                db_size: self.db_size,
            });
        }
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(ConfigError::InvalidNoise { value: self.noise });
        }
        if self.relevance == Relevance::SharedBits && self.class_count > MAX_BITMASK_CLASSES {
            return Err(ConfigError::TooManyClasses {
                class_count: self.class_count,
                max: MAX_BITMASK_CLASSES,
            });
        }
        Ok(())
    }

    /// Generator parameters derived from this configuration.
    pub fn synthetic_spec(&self) -> SyntheticSpec {
        SyntheticSpec {
            db_size: self.db_size,
            query_size: self.query_size,
            class_count: self.class_count,
            hash_bits: self.hash_bits,
            noise: self.noise,
            seed: self.seed,
        }
    }

    fn parse_usize_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::IntParseError {
                    name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_u64_from_env(name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::IntParseError {
                    name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_f32_from_env(name: &'static str, default: f32) -> Result<f32, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::FloatParseError {
                    name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(name) {
            Ok(value) => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidBool { name, value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_relevance_from_env(default: Relevance) -> Result<Relevance, ConfigError> {
        match env::var(Self::ENV_RELEVANCE) {
            Ok(value) => value
                .parse()
                .map_err(|reason| ConfigError::InvalidRelevance { value, reason }),
            Err(_) => Ok(default),
        }
    }
}
