//! Tokens of the LZ77 stream and their bit-level packing.
//!
//! Every token starts with a flag bit. A literal carries the raw byte in the
//! next 8 bits; a match carries two bytes holding a 12-bit distance and a
//! 4-bit length:
//!
//! ```text
//! literal: 0 | b7..b0
//! match:   1 | d11..d4 | d3..d0 l3..l0
//! ```

use serde::Serialize;

/// Bits occupied by a literal token (flag + byte).
pub const LITERAL_BITS: u64 = 9;

/// Bits occupied by a match token (flag + two payload bytes).
pub const MATCH_BITS: u64 = 17;

/// Largest distance representable in the 12-bit field.
pub const MAX_ENCODABLE_DISTANCE: u16 = 0x0FFF;

/// Largest length representable in the 4-bit field.
pub const MAX_ENCODABLE_LENGTH: u8 = 0x0F;

/// A back-reference found by the match finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Bytes back from the cursor to the start of the source run.
    pub distance: u16,
    /// Number of bytes the reference reproduces.
    pub length: u8,
}

/// One unit of the compressed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// A raw byte.
    Literal(u8),
    /// Copy `length` bytes starting `distance` bytes back in the output.
    Match {
        /// Backward offset into the output history.
        distance: u16,
        /// Number of bytes to copy.
        length: u8,
    },
}

impl Token {
    /// Encoded size of this token in bits.
    #[inline]
    pub fn bit_len(&self) -> u64 {
        match self {
            Self::Literal(_) => LITERAL_BITS,
            Self::Match { .. } => MATCH_BITS,
        }
    }

    /// Number of uncompressed bytes this token expands to.
    #[inline]
    pub fn output_len(&self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Match { length, .. } => usize::from(*length),
        }
    }

    /// Whether this is a match token.
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

impl From<Match> for Token {
    fn from(m: Match) -> Self {
        Self::Match {
            distance: m.distance,
            length: m.length,
        }
    }
}

/// Pack a distance and length into the two match payload bytes.
///
/// Bits of `distance` above 12 and of `length` above 4 are discarded; the
/// encoder guarantees they are zero.
#[inline]
pub fn pack_match(distance: u16, length: u8) -> [u8; 2] {
    debug_assert!(distance <= MAX_ENCODABLE_DISTANCE);
    debug_assert!(length <= MAX_ENCODABLE_LENGTH);

    [
        (distance >> 4) as u8,
        (((distance & 0x0F) as u8) << 4) | (length & 0x0F),
    ]
}

/// Recover distance and length from the two match payload bytes.
#[inline]
pub fn unpack_match(bytes: [u8; 2]) -> (u16, u8) {
    let [b1, b2] = bytes;
    let distance = (u16::from(b1) << 4) | u16::from(b2 >> 4);
    let length = b2 & 0x0F;
    (distance, length)
}
