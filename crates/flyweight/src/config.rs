//! Pool configuration

use serde::{Deserialize, Serialize};

/// Construction-time settings for an [`InstancePool`](crate::InstancePool)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Name used in log fields
    pub name: String,

    /// Number of slots to pre-allocate. Not a bound: the pool never evicts.
    pub initial_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            name: "pool".to_string(),
            initial_capacity: 0,
        }
    }
}

impl PoolConfig {
    /// Config with the given name and no pre-allocation
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the pre-allocation hint
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
