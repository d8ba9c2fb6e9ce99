//! LZ77-specific error types.

use oxilz_core::CoreError;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of a file operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoDirection {
    /// Reading the input file.
    Read,
    /// Writing the output file.
    Write,
}

impl fmt::Display for IoDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// LZ77 compression/decompression errors.
#[derive(Debug, Error)]
pub enum Lz77Error {
    /// Window size outside the supported range.
    #[error("Invalid window size: {size} (must be 1-{max})")]
    InvalidWindowSize {
        /// The rejected window size.
        size: usize,
        /// Largest accepted window size.
        max: usize,
    },

    /// File could not be read or written.
    #[error("Failed to {direction} {}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// Whether the read or the write failed.
        direction: IoDirection,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Match distance is zero or reaches before the start of the output.
    #[error(
        "Invalid back-reference distance {distance} at bit {bit_position}: only {available} bytes decoded"
    )]
    InvalidDistance {
        /// The encoded distance.
        distance: u16,
        /// Bytes produced so far.
        available: usize,
        /// Bit position of the match token.
        bit_position: u64,
    },

    /// Match length shorter than the minimum match.
    #[error("Invalid match length {length} at bit {bit_position}")]
    InvalidLength {
        /// The encoded length.
        length: u8,
        /// Bit position of the match token.
        bit_position: u64,
    },

    /// Stream ended in the middle of a token.
    #[error("Stream truncated inside a token at bit {bit_position}")]
    TruncatedToken {
        /// Bit position where the token started.
        bit_position: u64,
    },

    /// Framed stream does not start with the expected magic.
    #[error("Invalid magic number: expected {expected:02x?}, found {found:02x?}")]
    InvalidMagic {
        /// Expected magic bytes.
        expected: [u8; 4],
        /// Magic bytes found.
        found: Vec<u8>,
    },

    /// Framed stream uses a format version this build cannot read.
    #[error("Unsupported frame version: {0}")]
    UnsupportedVersion(u8),

    /// Framed stream shorter than its header.
    #[error("Frame too short: need {needed} header bytes, have {available}")]
    FrameTooShort {
        /// Header size.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// Decoded length differs from the framed length.
    #[error("Length mismatch: header says {expected} bytes, decoded {actual}")]
    LengthMismatch {
        /// Length recorded in the header.
        expected: u64,
        /// Length actually decoded.
        actual: u64,
    },

    /// Decoded data does not match the framed checksum.
    #[error("CRC mismatch: expected {expected:#010x}, computed {computed:#010x}")]
    CrcMismatch {
        /// CRC recorded in the header.
        expected: u32,
        /// CRC of the decoded data.
        computed: u32,
    },

    /// Low-level bitstream error.
    #[error(transparent)]
    Bitstream(#[from] CoreError),
}

/// Result type for LZ77 operations.
pub type Result<T> = std::result::Result<T, Lz77Error>;

impl Lz77Error {
    /// Create a read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            direction: IoDirection::Read,
            source,
        }
    }

    /// Create a write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            direction: IoDirection::Write,
            source,
        }
    }

    /// Whether this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::InvalidWindowSize { .. })
    }

    /// Whether this is a file I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Whether this error was raised while decoding a stream.
    pub fn is_decode(&self) -> bool {
        !self.is_config() && !self.is_io()
    }
}
