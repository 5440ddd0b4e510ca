//! # flyweight
//!
//! Keyed instance pool for flyweight objects.
//!
//! ## Architecture
//! - **HashMap**: AHash keyed map from key to `Arc<V>` (O(1) lookups)
//! - **RwLock**: shared reads for hits, exclusive write with re-check for misses
//! - **Stats**: lock-free hit/miss/rejection counters
//!
//! ## Guarantees
//! - At most one instance per key for the lifetime of the pool
//! - Repeated lookups return the same allocation (`Arc::ptr_eq`)
//! - No eviction, expiry or capacity bound
//!
//! ```
//! use flyweight::InstancePool;
//!
//! let pool = InstancePool::new(|color: &String| format!("{color} circle"));
//! let a = pool.get("Red".to_string()).unwrap();
//! let b = pool.get("Red".to_string()).unwrap();
//! assert!(std::sync::Arc::ptr_eq(&a, &b));
//! assert_eq!(pool.len(), 1);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod key;
mod pool;
mod stats;

pub use config::PoolConfig;
pub use error::{Error, Result};
pub use key::PoolKey;
pub use pool::InstancePool;
pub use stats::{PoolStats, StatsSnapshot};
