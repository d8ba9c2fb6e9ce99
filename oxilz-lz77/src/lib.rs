//! # OxiLZ-LZ77: Sliding-Window LZ77 Compression
//!
//! This crate implements a small LZ77 compressor: repeated byte sequences
//! within a bounded history window are replaced by (distance, length)
//! back-references, and everything else is stored as literal bytes.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Exhaustive match search**: longest match wins, nearest source on ties
//! - **Run extension**: a match may overlap the bytes it produces
//! - **Hardened decoding**: out-of-range distances and truncated tokens are
//!   errors, never out-of-bounds reads
//! - **Optional framing**: length and CRC-32 checked container
//!
//! ## Stream Format
//!
//! The raw stream has no header. Each token is a flag bit followed by its
//! payload, packed MSB-first, and the final byte is padded with zero bits:
//!
//! - **Literal**: `0` + 8 bits of data
//! - **Match**: `1` + `distance >> 4` (8 bits) + `(distance & 0xF) << 4 | length` (8 bits)
//!
//! Distances range over `1..=window_size` (at most 400, fitting 12 bits) and
//! lengths over `2..=15` (fitting 4 bits).
//!
//! ## Example
//!
//! ```rust
//! use oxilz_lz77::{Lz77Config, compress, decompress};
//!
//! let original = b"abcabcabcabcabcabc";
//! let config = Lz77Config::new(64).unwrap();
//!
//! let compressed = compress(original, &config).unwrap();
//! assert!(compressed.len() < original.len());
//!
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
mod decoder;
mod encoder;
mod error;
pub mod file;
pub mod frame;
mod match_finder;
mod stats;
pub mod token;

pub use config::{
    DEFAULT_WINDOW_SIZE, LOOKAHEAD_LENGTH, Lz77Config, MAX_WINDOW_SIZE, MIN_MATCH_LENGTH,
};
pub use decoder::{Lz77Decoder, TokenReader};
pub use encoder::{Lz77Encoder, Tokens, write_token};
pub use error::{IoDirection, Lz77Error, Result};
pub use file::{
    CompressOptions, FileReport, compress_file, compress_file_framed, compress_file_with_progress,
    decompress_file, decompress_file_framed,
};
pub use frame::{FrameHeader, compress_framed, decompress_framed};
pub use match_finder::MatchFinder;
pub use stats::StreamStats;
pub use token::{Match, Token};

/// Compress data with the given configuration.
///
/// # Example
///
/// ```rust
/// use oxilz_lz77::{Lz77Config, compress};
///
/// // No repeats: nine bits per byte, padded to whole bytes.
/// let compressed = compress(b"abcdefgh", &Lz77Config::default()).unwrap();
/// assert_eq!(compressed.len(), 9);
/// ```
pub fn compress(data: &[u8], config: &Lz77Config) -> Result<Vec<u8>> {
    Lz77Encoder::new(*config).encode(data)
}

/// Decompress a raw token stream.
///
/// No configuration is needed: distances and lengths are stored in the
/// stream.
///
/// # Example
///
/// ```rust
/// use oxilz_lz77::{Lz77Config, compress, decompress};
///
/// let original = b"aaaaaaaaaa";
/// let compressed = compress(original, &Lz77Config::default()).unwrap();
/// assert_eq!(decompress(&compressed).unwrap(), original);
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Lz77Decoder::new().decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_default() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = compress(original, &Lz77Config::default()).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress(b"", &Lz77Config::default()).unwrap();
        assert!(compressed.is_empty());
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_single_byte() {
        let compressed = compress(b"A", &Lz77Config::default()).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), b"A");
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let compressed = compress(&original, &Lz77Config::MAX).unwrap();
        assert_eq!(compressed.len(), 288);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_repeating_pattern() {
        let original = vec![b'X'; 1000];
        let compressed = compress(&original, &Lz77Config::default()).unwrap();

        // One literal then 15-byte matches at 17 bits each.
        assert!(compressed.len() < original.len() / 5);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }
}
