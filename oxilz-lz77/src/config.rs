//! LZ77 compressor configuration.

use crate::error::{Lz77Error, Result};

/// Largest accepted window size. Distances must fit the 12-bit field.
pub const MAX_WINDOW_SIZE: usize = 400;

/// Window size used when the caller does not pick one.
pub const DEFAULT_WINDOW_SIZE: usize = 20;

/// Longest match the encoder emits. Lengths occupy a 4-bit field.
pub const LOOKAHEAD_LENGTH: usize = 15;

/// Shortest match worth emitting; a one-byte match is no cheaper than a literal.
pub const MIN_MATCH_LENGTH: usize = 2;

// Distance goes in 12 bits, length in 4.
const _: () = assert!(MAX_WINDOW_SIZE < 1 << 12);
const _: () = assert!(LOOKAHEAD_LENGTH < 1 << 4);

/// Compressor configuration, fixed for the lifetime of an encoder.
///
/// Decompression never needs a configuration: distances and lengths are
/// self-describing in the stream.
///
/// # Example
///
/// ```
/// use oxilz_lz77::Lz77Config;
///
/// let config = Lz77Config::new(400).unwrap();
/// assert_eq!(config.window_size(), 400);
///
/// assert!(Lz77Config::new(0).is_err());
/// assert!(Lz77Config::new(401).is_err());
/// assert_eq!(Lz77Config::default().window_size(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77Config {
    window_size: u16,
}

impl Lz77Config {
    /// Configuration with the default 20-byte window.
    pub const DEFAULT: Self = Self {
        window_size: DEFAULT_WINDOW_SIZE as u16,
    };

    /// Configuration with the largest supported window.
    pub const MAX: Self = Self {
        window_size: MAX_WINDOW_SIZE as u16,
    };

    /// Create a configuration, rejecting window sizes outside `1..=400`.
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 || window_size > MAX_WINDOW_SIZE {
            return Err(Lz77Error::InvalidWindowSize {
                size: window_size,
                max: MAX_WINDOW_SIZE,
            });
        }

        Ok(Self {
            window_size: window_size as u16,
        })
    }

    /// Maximum back-reference distance.
    #[inline]
    pub fn window_size(&self) -> usize {
        usize::from(self.window_size)
    }

    /// Maximum match length.
    #[inline]
    pub fn lookahead_length(&self) -> usize {
        LOOKAHEAD_LENGTH
    }
}

impl Default for Lz77Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Lz77Config::default();
        assert_eq!(config.window_size(), 20);
        assert_eq!(config.lookahead_length(), 15);
    }

    #[test]
    fn test_window_bounds() {
        assert_eq!(Lz77Config::new(1).unwrap().window_size(), 1);
        assert_eq!(Lz77Config::new(400).unwrap(), Lz77Config::MAX);

        for bad in [0, 401, 4096, usize::MAX] {
            let err = Lz77Config::new(bad).unwrap_err();
            assert!(
                matches!(err, Lz77Error::InvalidWindowSize { size, max: 400 } if size == bad),
                "window {bad} should be rejected"
            );
        }
    }
}
