//! Error types for the interop boundary.

use thiserror::Error;

/// Errors crossing the foreign-call boundary.
///
/// Every variant is fatal to the demonstration sequence: errors propagate
/// to the caller and are never recovered or retried.
#[derive(Debug, Error)]
pub enum InteropError {
    /// Unmanaged buffer could not be obtained from the allocator.
    #[error("failed to allocate {size} bytes of unmanaged memory")]
    Allocation {
        /// Requested allocation size in bytes, terminator included.
        size: usize,
    },

    /// Input string contains an interior NUL and has no C representation.
    #[error("interior NUL byte at position {position}")]
    NulByte {
        /// Byte offset of the first interior NUL.
        position: usize,
    },

    /// Shared library could not be loaded.
    #[error("failed to load library '{path}': {reason}")]
    Load {
        /// Path the load was attempted from.
        path: String,
        /// Loader-reported reason.
        reason: String,
    },

    /// Symbol not resolvable in a loaded library.
    #[error("symbol '{name}' not found: {reason}")]
    Symbol {
        /// Symbol name that failed to resolve.
        name: String,
        /// Loader-reported reason.
        reason: String,
    },

    /// Managed-side output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for interop operations.
pub type InteropResult<T> = Result<T, InteropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InteropError::Allocation { size: 32 };
        assert!(err.to_string().contains("32 bytes"));

        let err = InteropError::NulByte { position: 5 };
        assert!(err.to_string().contains("position 5"));

        let err = InteropError::Load {
            path: "libnope.so".to_string(),
            reason: "no such file".to_string(),
        };
        assert!(err.to_string().contains("libnope.so"));

        let err = InteropError::Symbol {
            name: "missing_fn".to_string(),
            reason: "undefined symbol".to_string(),
        };
        assert!(err.to_string().contains("missing_fn"));
    }
}
