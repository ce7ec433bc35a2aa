//! Tunables for the radix sort.

use thiserror::Error;

/// Sub-problems of at most this many keys are finished with insertion sort.
pub const DEFAULT_INSERTION_CUTOFF: usize = 20;

/// Sub-problems of more than this many keys are bucketed two bytes at a time.
pub const DEFAULT_BYTE_BUDGET: usize = 16_000;

/// Errors raised when building a [`SortConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("insertion cutoff must be positive")]
    ZeroInsertionCutoff,

    #[error("byte budget cutoff must be positive")]
    ZeroByteBudget,
}

/// Thresholds steering the adaptive sort.
///
/// Both values only affect performance: every valid configuration produces
/// the same ordering.
///
/// # Examples
///
/// ```
/// use msdsort::SortConfig;
///
/// let config = SortConfig::default().with_insertion_cutoff(32).unwrap();
/// assert_eq!(config.insertion_cutoff(), 32);
/// assert!(SortConfig::new(0, 100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    insertion_cutoff: usize,
    byte_budget: usize,
}

impl SortConfig {
    pub fn new(insertion_cutoff: usize, byte_budget: usize) -> Result<Self, ConfigError> {
        if insertion_cutoff == 0 {
            return Err(ConfigError::ZeroInsertionCutoff);
        }
        if byte_budget == 0 {
            return Err(ConfigError::ZeroByteBudget);
        }
        Ok(Self {
            insertion_cutoff,
            byte_budget,
        })
    }

    /// Largest sub-problem handed to insertion sort.
    pub fn insertion_cutoff(&self) -> usize {
        self.insertion_cutoff
    }

    /// Largest sub-problem bucketed one byte at a time.
    pub fn byte_budget(&self) -> usize {
        self.byte_budget
    }

    pub fn with_insertion_cutoff(self, insertion_cutoff: usize) -> Result<Self, ConfigError> {
        Self::new(insertion_cutoff, self.byte_budget)
    }

    pub fn with_byte_budget(self, byte_budget: usize) -> Result<Self, ConfigError> {
        Self::new(self.insertion_cutoff, byte_budget)
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            insertion_cutoff: DEFAULT_INSERTION_CUTOFF,
            byte_budget: DEFAULT_BYTE_BUDGET,
        }
    }
}
