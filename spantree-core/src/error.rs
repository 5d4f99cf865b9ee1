//! Typed error handling for spantree.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about which bound or input was violated.

use thiserror::Error;

/// Main error type for spantree operations.
///
/// This provides typed errors that library consumers can match on,
/// unlike opaque `anyhow::Error` types. Every variant aborts the whole
/// query: a traversal never degrades to a partial or approximate
/// result on failure.
#[derive(Error, Debug)]
pub enum SpantreeError {
    /// Invalid query argument, rejected before any traversal starts
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Edge label name that the store cannot resolve
    #[error("Unknown edge label: '{name}'")]
    UnknownLabel { name: String },

    /// Explored search space surpassed the configured capacity
    #[error("Capacity of {capacity} exceeded: {explored} vertices explored")]
    CapacityExceeded { capacity: u64, explored: u64 },

    /// Backend store failure during an edge or property fetch
    #[error("Store error: {message}")]
    Store {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SpantreeError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an unknown-label error.
    pub fn unknown_label(name: impl Into<String>) -> Self {
        Self::UnknownLabel { name: name.into() }
    }

    /// Create a capacity-exceeded error.
    pub fn capacity(capacity: u64, explored: u64) -> Self {
        Self::CapacityExceeded { capacity, explored }
    }

    /// Create a store error without an underlying source.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store error wrapping an underlying backend error.
    pub fn store_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error was raised before any traversal state existed.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::UnknownLabel { .. }
        )
    }
}

/// Convenience type alias for spantree results.
pub type SpantreeResult<T> = Result<T, SpantreeError>;
