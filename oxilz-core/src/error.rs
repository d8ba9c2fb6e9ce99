//! Error types for low-level bitstream operations.

use thiserror::Error;

/// Errors raised by the bit reader and writer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Bit width outside the supported 1..=16 range.
    #[error("Invalid bit width: {0} (must be 1-16)")]
    InvalidBitWidth(u8),

    /// Attempted to read past the end of the input.
    #[error("Unexpected end of data at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the read was attempted.
        position: u64,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create an unexpected EOF error.
    pub fn unexpected_eof(position: u64) -> Self {
        Self::UnexpectedEof { position }
    }

    /// Whether this error signals exhausted input.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidBitWidth(17);
        assert!(err.to_string().contains("17"));

        let err = CoreError::unexpected_eof(42);
        assert!(err.to_string().contains("bit position 42"));
        assert!(err.is_eof());
        assert!(!CoreError::InvalidBitWidth(0).is_eof());
    }
}
