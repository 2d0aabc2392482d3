/// Capacity used when nothing else is configured.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

/// Storage settings of a `Stack`.
///
/// `capacity_limit` is a ceiling on the number of slots the stack may ever allocate. Requests
/// above it are refused the same way a failing allocator refuses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    initial_capacity: usize,
    capacity_limit: Option<usize>,
}

impl StackConfig {
    pub fn builder() -> StackConfigBuilder {
        StackConfigBuilder {
            config: StackConfig::default(),
        }
    }

    /// Slots reserved at construction, and the first growth target of an empty buffer.
    #[inline(always)]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[inline(always)]
    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Returns true if a buffer of `capacity` slots may be requested.
    #[inline(always)]
    pub fn admits(&self, capacity: usize) -> bool {
        self.capacity_limit.map_or(true, |limit| capacity <= limit)
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        StackConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            capacity_limit: None,
        }
    }
}

pub struct StackConfigBuilder {
    config: StackConfig,
}

impl StackConfigBuilder {
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn capacity_limit(mut self, limit: usize) -> Self {
        self.config.capacity_limit = Some(limit);
        self
    }

    /// Finishes the configuration. An initial capacity above the limit is clamped to it.
    pub fn build(self) -> StackConfig {
        let mut config = self.config;
        if let Some(limit) = config.capacity_limit {
            config.initial_capacity = config.initial_capacity.min(limit);
        }
        config
    }
}
