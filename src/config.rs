use crate::error::{Result, StrBufError};
use crate::growth::GrowthPolicy;

/// Capacity of a freshly created `StrBuf`, terminator included.
pub const DEFAULT_CAPACITY: usize = 256;

/// Construction-time settings for a `StrBuf`.
///
/// ```
/// # use strbuf::{GrowthPolicy, StrBuf, StrBufConfig};
/// let config = StrBufConfig::default()
///     .with_initial_capacity(16)
///     .with_growth(GrowthPolicy::Doubling)
///     .with_max_rewrite_passes(Some(64));
/// let s = StrBuf::with_config(config).unwrap();
/// assert_eq!(s.capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrBufConfig {
    /// Storage allocated up front, terminator included. Must be non-zero.
    pub initial_capacity: usize,
    /// How storage grows when a write does not fit.
    pub growth: GrowthPolicy,
    /// Upper bound on batch rewrite passes; `None` means unbounded.
    pub max_rewrite_passes: Option<usize>,
}

impl Default for StrBufConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth: GrowthPolicy::Exact,
            max_rewrite_passes: None,
        }
    }
}

impl StrBufConfig {
    /// Sets the storage allocated up front, terminator included.
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets how storage grows once a write no longer fits.
    #[must_use]
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Bounds batch rewrite passes; `None` removes the bound.
    #[must_use]
    pub fn with_max_rewrite_passes(mut self, passes: Option<usize>) -> Self {
        self.max_rewrite_passes = passes;
        self
    }

    /// Checks the settings without allocating.
    ///
    /// # Errors
    ///
    /// Returns `StrBufError::InvalidConfiguration` if:
    /// - `initial_capacity` is 0 (no room for the terminator)
    /// - `max_rewrite_passes` is `Some(0)`
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(StrBufError::InvalidConfiguration {
                parameter: "initial_capacity",
                value: 0,
            });
        }
        if self.max_rewrite_passes == Some(0) {
            return Err(StrBufError::InvalidConfiguration {
                parameter: "max_rewrite_passes",
                value: 0,
            });
        }
        Ok(())
    }
}
