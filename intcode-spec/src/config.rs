//! # Search Configuration
//!
//! Parameters of the (noun, verb) sweep: where the two inputs are patched,
//! where the result is read back, and how far each input ranges.

use crate::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier combining a (noun, verb) pair into a single answer
pub const CHECKSUM_RADIX: Cell = 100;

/// Largest accepted search limit: `limit * limit` still fits in a `Cell`
pub const MAX_LIMIT: Cell = 3_037_000_499;

/// Configuration for the exhaustive (noun, verb) search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Exclusive upper bound for both noun and verb
    pub limit: Cell,
    /// Address patched with the noun before each trial
    pub noun_addr: usize,
    /// Address patched with the verb before each trial
    pub verb_addr: usize,
    /// Address read back after each trial
    pub output_addr: usize,
}

impl SearchConfig {
    /// Default configuration:
    /// - nouns and verbs in [0, 100)
    /// - noun at address 1, verb at address 2
    /// - result at address 0
    pub const DEFAULT: Self = Self {
        limit: 100,
        noun_addr: 1,
        verb_addr: 2,
        output_addr: 0,
    };

    /// Create a new configuration with validation
    pub const fn new(
        limit: Cell,
        noun_addr: usize,
        verb_addr: usize,
        output_addr: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            limit,
            noun_addr,
            verb_addr,
            output_addr,
        };

        if limit <= 0 {
            return Err(ConfigError::ZeroLimit);
        }
        if limit > MAX_LIMIT {
            return Err(ConfigError::LimitTooLarge(limit));
        }
        if noun_addr == verb_addr {
            return Err(ConfigError::SameAddress(noun_addr));
        }

        Ok(config)
    }

    /// Builder-style override of the input range
    pub fn with_limit(self, limit: Cell) -> Result<Self, ConfigError> {
        Self::new(limit, self.noun_addr, self.verb_addr, self.output_addr)
    }

    /// Number of trials in a full sweep
    #[inline]
    pub const fn trials(&self) -> u64 {
        (self.limit as u64) * (self.limit as u64)
    }

    /// Combine a (noun, verb) pair: `100 * noun + verb`, saturating at the
    /// `Cell` bounds
    #[inline]
    pub const fn checksum(noun: Cell, verb: Cell) -> Cell {
        CHECKSUM_RADIX.saturating_mul(noun).saturating_add(verb)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.limit, self.noun_addr, self.verb_addr, self.output_addr).map(|_| ())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchConfig {{ range: [0, {}), noun: [{}], verb: [{}], output: [{}] }}",
            self.limit, self.noun_addr, self.verb_addr, self.output_addr,
        )
    }
}

/// Configuration error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The search range must be non-empty
    ZeroLimit,
    /// Noun and verb must be patched at distinct addresses
    SameAddress(usize),
    /// The full sweep would not be countable in a `Cell`
    LimitTooLarge(Cell),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroLimit => {
                write!(f, "search limit must be positive")
            }
            ConfigError::SameAddress(addr) => {
                write!(f, "noun and verb share address {}", addr)
            }
            ConfigError::LimitTooLarge(limit) => {
                write!(f, "search limit {} exceeds {}", limit, MAX_LIMIT)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::DEFAULT;
        assert_eq!(config.limit, 100);
        assert_eq!(config.noun_addr, 1);
        assert_eq!(config.verb_addr, 2);
        assert_eq!(config.output_addr, 0);
        assert_eq!(config.trials(), 10_000);
        assert_eq!(SearchConfig::default(), config);
    }

    #[test]
    fn test_checksum() {
        assert_eq!(SearchConfig::checksum(12, 2), 1202);
        assert_eq!(SearchConfig::checksum(0, 0), 0);
        assert_eq!(SearchConfig::checksum(99, 99), 9999);
    }

    #[test]
    fn test_validation() {
        assert!(SearchConfig::new(10, 1, 2, 0).is_ok());
        assert!(SearchConfig::new(1, 5, 6, 5).is_ok());

        assert_eq!(SearchConfig::new(0, 1, 2, 0).unwrap_err(), ConfigError::ZeroLimit);
        assert_eq!(SearchConfig::new(-3, 1, 2, 0).unwrap_err(), ConfigError::ZeroLimit);
        assert_eq!(
            SearchConfig::new(100, 3, 3, 0).unwrap_err(),
            ConfigError::SameAddress(3)
        );

        let mut config = SearchConfig::DEFAULT;
        config.verb_addr = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_limit() {
        let config = SearchConfig::DEFAULT.with_limit(10).unwrap();
        assert_eq!(config.limit, 10);
        assert_eq!(config.trials(), 100);
        assert!(SearchConfig::DEFAULT.with_limit(0).is_err());
    }

    #[test]
    fn test_limit_upper_bound() {
        let config = SearchConfig::new(MAX_LIMIT, 1, 2, 0).unwrap();
        assert_eq!(config.trials(), (MAX_LIMIT as u64) * (MAX_LIMIT as u64));
        assert!(config.trials() <= i64::MAX as u64);

        let last = MAX_LIMIT - 1;
        assert_eq!(SearchConfig::checksum(last, last), 100 * last + last);

        assert_eq!(
            SearchConfig::new(MAX_LIMIT + 1, 1, 2, 0).unwrap_err(),
            ConfigError::LimitTooLarge(MAX_LIMIT + 1)
        );
        assert_eq!(
            SearchConfig::new(1 << 33, 1, 2, 0).unwrap_err(),
            ConfigError::LimitTooLarge(1 << 33)
        );
        assert!(SearchConfig::new(i64::MAX, 1, 2, 0).is_err());
        assert!(SearchConfig::DEFAULT.with_limit(i64::MAX).is_err());

        let mut config = SearchConfig::DEFAULT;
        config.limit = i64::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_checksum_saturates() {
        assert_eq!(SearchConfig::checksum(i64::MAX, 0), i64::MAX);
        assert_eq!(SearchConfig::checksum(i64::MAX / 100, 99), i64::MAX);
        assert_eq!(SearchConfig::checksum(i64::MIN, -1), i64::MIN);
    }

    #[test]
    fn test_display() {
        let s = SearchConfig::DEFAULT.to_string();
        assert!(s.contains("[0, 100)"));
        assert!(s.contains("noun: [1]"));
    }
}
