//! InstancePool: keyed flyweight factory

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ahash::RandomState;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::config::PoolConfig;
use crate::error::Result;
use crate::key::PoolKey;
use crate::stats::PoolStats;

type Factory<K, V> = Box<dyn Fn(&K) -> V + Send + Sync>;

/// Pool holding exactly one shared instance per key.
///
/// Instances are built lazily by the pool's factory on the first request
/// for a key and live as long as the pool. There is no eviction.
///
/// The pool is `Sync` and can be shared behind an `Arc`. Hits only take a
/// read lock; a miss takes the write lock and looks the key up again before
/// building, so racing first requests for one key still build it once. The
/// factory runs with the write lock held and must not call back into the
/// same pool.
pub struct InstancePool<K, V> {
    /// Key to shared instance
    instances: RwLock<HashMap<K, Arc<V>, RandomState>>,

    /// Builds the instance for a key on first request
    factory: Factory<K, V>,

    /// Lookup statistics
    stats: PoolStats,

    /// Name used in log fields
    name: String,
}

impl<K, V> InstancePool<K, V>
where
    K: PoolKey,
{
    /// Create an empty pool that builds instances with `factory`
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&K) -> V + Send + Sync + 'static,
    {
        Self::from_config(&PoolConfig::default(), factory)
    }

    /// Create an empty pool with room for `capacity` keys before reallocating
    pub fn with_capacity<F>(capacity: usize, factory: F) -> Self
    where
        F: Fn(&K) -> V + Send + Sync + 'static,
    {
        Self::from_config(&PoolConfig::default().with_initial_capacity(capacity), factory)
    }

    /// Create an empty pool from a [`PoolConfig`]
    pub fn from_config<F>(config: &PoolConfig, factory: F) -> Self
    where
        F: Fn(&K) -> V + Send + Sync + 'static,
    {
        Self {
            instances: RwLock::new(HashMap::with_capacity_and_hasher(
                config.initial_capacity,
                RandomState::new(),
            )),
            factory: Box::new(factory),
            stats: PoolStats::new(),
            name: config.name.clone(),
        }
    }

    /// Get the instance for `key`, building it on first request
    ///
    /// # Arguments
    /// * `key` - Lookup key
    ///
    /// # Returns
    /// * `Result<Arc<V>>` - The shared instance; the same allocation on every call
    ///   for an equal key
    pub fn get(&self, key: K) -> Result<Arc<V>> {
        self.try_get_with(key, |k| Ok((self.factory)(k)))
    }

    /// Get the instance for `key`, building it with `build` on first request
    ///
    /// The pool's own factory is bypassed. If `build` fails nothing is stored
    /// and a later call may try again.
    pub fn try_get_with<F>(&self, key: K, build: F) -> Result<Arc<V>>
    where
        F: FnOnce(&K) -> Result<V>,
    {
        if let Some(instance) = self.instances.read().get(&key) {
            self.stats.record_hit();
            return Ok(Arc::clone(instance));
        }

        if let Err(err) = key.validate() {
            self.stats.record_rejected();
            warn!(pool = %self.name, error = %err, "rejected pool key");
            return Err(err);
        }

        let mut instances = self.instances.write();

        // Another caller may have built it between the two locks
        if let Some(instance) = instances.get(&key) {
            self.stats.record_hit();
            return Ok(Arc::clone(instance));
        }

        let instance = Arc::new(build(&key)?);
        self.stats.record_miss();
        debug!(pool = %self.name, key = ?key, size = instances.len() + 1, "created pooled instance");
        instances.insert(key, Arc::clone(&instance));

        Ok(instance)
    }

    /// Get the instance for `key` without building one
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        self.instances.read().get(key).cloned()
    }

    /// Check whether an instance exists for `key`
    pub fn contains(&self, key: &K) -> bool {
        self.instances.read().contains_key(key)
    }

    /// Keys that currently have an instance, in no particular order
    pub fn keys(&self) -> Vec<K> {
        self.instances.read().keys().cloned().collect()
    }

    /// Get the number of pooled instances
    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.instances.read().is_empty()
    }

    /// Get lookup statistics
    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }

    /// Get the pool name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<K, V> fmt::Debug for InstancePool<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstancePool")
            .field("name", &self.name)
            .field("len", &self.instances.read().len())
            .field("stats", &self.stats)
            .finish()
    }
}
