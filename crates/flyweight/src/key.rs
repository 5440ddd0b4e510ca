//! Key validation for pooled instances

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::error::{Error, Result};

/// A value usable as a pool key.
///
/// Hashability is enforced by the trait bounds. `validate` covers what the
/// type system cannot: string keys must not be empty or blank, which is the
/// closest thing a Rust key has to being "null".
pub trait PoolKey: Hash + Eq + Clone + Debug {
    /// Check the key before an instance is built for it
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

fn validate_label(label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(Error::invalid_key(label, "empty key"));
    }
    if label.trim().is_empty() {
        return Err(Error::invalid_key(label, "blank key"));
    }
    Ok(())
}

impl PoolKey for String {
    fn validate(&self) -> Result<()> {
        validate_label(self)
    }
}

impl PoolKey for &'static str {
    fn validate(&self) -> Result<()> {
        validate_label(self)
    }
}

impl PoolKey for Box<str> {
    fn validate(&self) -> Result<()> {
        validate_label(self)
    }
}

impl PoolKey for Arc<str> {
    fn validate(&self) -> Result<()> {
        validate_label(self)
    }
}

macro_rules! always_valid {
    ($($t:ty),* $(,)?) => {
        $(impl PoolKey for $t {})*
    };
}

always_valid!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);
