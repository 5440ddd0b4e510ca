//! Error types for flyweight

use thiserror::Error;

/// Result type alias for pool and flyweight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pool and flyweight operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key rejected by [`PoolKey::validate`](crate::PoolKey::validate)
    #[error("Invalid key {key:?}: {reason}")]
    InvalidKey {
        /// Debug rendering of the rejected key
        key: String,
        /// Why the key was rejected
        reason: &'static str,
    },

    /// A variant does not provide an optional capability
    #[error("{variant} does not support {capability}")]
    Unsupported {
        /// Name of the missing capability
        capability: &'static str,
        /// Variant that was asked for it
        variant: String,
    },

    /// A fallible constructor refused to build an instance
    #[error("Construction failed: {0}")]
    Construction(String),
}

impl Error {
    /// Build an [`Error::InvalidKey`] from any debuggable key
    pub fn invalid_key<K: std::fmt::Debug + ?Sized>(key: &K, reason: &'static str) -> Self {
        Error::InvalidKey {
            key: format!("{:?}", key),
            reason,
        }
    }

    /// Build an [`Error::Unsupported`] for `variant`
    pub fn unsupported(capability: &'static str, variant: impl Into<String>) -> Self {
        Error::Unsupported {
            capability,
            variant: variant.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_display() {
        let err = Error::invalid_key("", "empty key");
        assert_eq!(err.to_string(), "Invalid key \"\": empty key");
    }

    #[test]
    fn test_unsupported_display() {
        let err = Error::unsupported("area", "Marker");
        assert_eq!(err.to_string(), "Marker does not support area");
    }
}
