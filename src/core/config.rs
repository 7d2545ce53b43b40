//! Configuration for materializing consumers.
//!
//! Collection consumers may pre-allocate storage from a cursor's
//! [`SizeDescriptor`]. The descriptor never bounds iteration, but an upper
//! bound such as the one `take(usize::MAX)` reports can be far larger than
//! what the cursor actually yields, so the pre-allocation is capped.

use crate::foundation::size::SizeDescriptor;

/// Default cap on slots reserved up front from a size hint.
pub const DEFAULT_MAX_PREALLOCATION: usize = 1 << 16;

/// Controls how collection consumers use size hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeConfig {
    honour_size_hint: bool,
    max_preallocation: usize,
}

impl Default for MaterializeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterializeConfig {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            honour_size_hint: true,
            max_preallocation: DEFAULT_MAX_PREALLOCATION,
        }
    }

    /// Starts building a configuration from the defaults.
    pub fn builder() -> MaterializeConfigBuilder {
        MaterializeConfigBuilder {
            config: Self::new(),
        }
    }

    /// Whether size descriptors are used to pre-allocate.
    #[inline]
    pub const fn honours_size_hint(&self) -> bool {
        self.honour_size_hint
    }

    /// The most slots pre-allocated from a size descriptor.
    #[inline]
    pub const fn max_preallocation(&self) -> usize {
        self.max_preallocation
    }

    /// The capacity to reserve for a cursor described by `size`.
    pub fn initial_capacity(&self, size: SizeDescriptor) -> usize {
        if !self.honour_size_hint {
            return 0;
        }
        match size.capacity_hint() {
            Some(hint) if hint > self.max_preallocation => {
                tracing::debug!(
                    hint,
                    cap = self.max_preallocation,
                    "clamping pre-allocation from size hint"
                );
                self.max_preallocation
            }
            Some(hint) => hint,
            None => 0,
        }
    }
}

/// Builder for [`MaterializeConfig`].
#[derive(Debug, Clone)]
pub struct MaterializeConfigBuilder {
    config: MaterializeConfig,
}

impl MaterializeConfigBuilder {
    /// Sets whether size descriptors are used to pre-allocate.
    pub fn with_size_hint(mut self, honour: bool) -> Self {
        self.config.honour_size_hint = honour;
        self
    }

    /// Sets the most slots pre-allocated from a size descriptor.
    pub fn with_max_preallocation(mut self, max: usize) -> Self {
        self.config.max_preallocation = max;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> MaterializeConfig {
        self.config
    }
}
